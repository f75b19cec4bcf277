//! Subprocess execution with full stdout/stderr capture.
//!
//! Each pipe is drained on its own thread while the child runs, so a child
//! that fills one pipe never blocks waiting for us to read the other.

use crate::error::{MobitorError, Result};
use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Everything captured from a finished child process.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code; `-signal` on Unix when the child was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn `args[0]` with `args[1..]`, wait for it, and collect its output.
///
/// Returns `MobitorError::Launch` if the process cannot be spawned or
/// awaited. A non-zero exit is not an error.
pub fn run_captured(args: &[String]) -> Result<CapturedOutput> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| MobitorError::Launch("empty command".to_string()))?;

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| MobitorError::Launch(e.to_string()))?;

    let stdout_reader = child.stdout.take().map(drain);
    let stderr_reader = child.stderr.take().map(drain);

    let status = child
        .wait()
        .map_err(|e| MobitorError::Launch(format!("failed to wait for process: {}", e)))?;

    Ok(CapturedOutput {
        exit_code: exit_code(status),
        stdout: join_reader(stdout_reader)?,
        stderr: join_reader(stderr_reader)?,
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(reader: Option<JoinHandle<std::io::Result<Vec<u8>>>>) -> Result<String> {
    let Some(handle) = reader else {
        return Ok(String::new());
    };

    let bytes = handle
        .join()
        .map_err(|_| MobitorError::Launch("output reader thread panicked".to_string()))?
        .map_err(|e| MobitorError::Launch(format!("failed to read process output: {}", e)))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
