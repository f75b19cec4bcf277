//! Command monitoring.
//!
//! Runs one command and reports on it: a start notification before launch,
//! then exactly one terminal notification (success, failure, or crash).
//! Delivery failures never change the outcome.
//!
//! ```text
//! NotStarted -> Running -> Succeeded | Failed | Crashed
//! ```

pub mod capture;

use crate::context::ExecutionContext;
use crate::error::{MobitorError, Result};
use crate::format::{format_crash, format_failure, format_start, format_success};
use crate::notify::Notifier;
use chrono::Local;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// The command to run: program name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredCommand {
    args: Vec<String>,
}

impl MonitoredCommand {
    /// Create a command; at least the program name is required.
    pub fn new(args: Vec<String>) -> Result<Self> {
        if args.is_empty() {
            return Err(MobitorError::UserError(
                "no command given to monitor".to_string(),
            ));
        }
        Ok(Self { args })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command as shown in notifications: arguments joined by spaces.
    pub fn display(&self) -> String {
        self.args.join(" ")
    }
}

/// Terminal result of one monitored execution.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// Exit code 0.
    Succeeded { elapsed: Duration },
    /// Non-zero exit code, with the full captured stderr.
    Failed {
        exit_code: i32,
        stderr: String,
        elapsed: Duration,
    },
    /// The command could not be launched (or awaited).
    Crashed { error: String, elapsed: Duration },
}

impl ExecutionOutcome {
    /// Wall-clock time from launch to the terminal state.
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Succeeded { elapsed }
            | Self::Failed { elapsed, .. }
            | Self::Crashed { elapsed, .. } => *elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Run `command`, notifying at start and at its terminal state.
pub fn run_and_monitor(command: &MonitoredCommand, notifier: &Notifier) -> ExecutionOutcome {
    let ctx = ExecutionContext::capture();
    run_with_context(command, &ctx, notifier)
}

/// Same as [`run_and_monitor`] with an explicit execution context.
pub fn run_with_context(
    command: &MonitoredCommand,
    ctx: &ExecutionContext,
    notifier: &Notifier,
) -> ExecutionOutcome {
    notifier.notify(&format_start(command, ctx));
    info!(command = %command.display(), host = %ctx.host, user = %ctx.user, "Process started");

    let start = Instant::now();
    let result = capture::run_captured(command.args());
    let elapsed = start.elapsed();
    let finished_at = Local::now();

    let outcome = match result {
        Ok(output) if output.exit_code == 0 => ExecutionOutcome::Succeeded { elapsed },
        Ok(output) => ExecutionOutcome::Failed {
            exit_code: output.exit_code,
            stderr: output.stderr,
            elapsed,
        },
        Err(e) => ExecutionOutcome::Crashed {
            error: e.to_string(),
            elapsed,
        },
    };

    let text = match &outcome {
        ExecutionOutcome::Succeeded { elapsed } => {
            info!(elapsed_secs = elapsed.as_secs_f64(), "Process completed successfully");
            format_success(command, ctx, &finished_at, *elapsed)
        }
        ExecutionOutcome::Failed {
            exit_code,
            stderr,
            elapsed,
        } => {
            warn!(exit_code, elapsed_secs = elapsed.as_secs_f64(), "Process failed");
            format_failure(command, ctx, &finished_at, *exit_code, *elapsed, stderr)
        }
        ExecutionOutcome::Crashed { error, elapsed } => {
            warn!(error = %error, "Process could not be run");
            format_crash(command, ctx, &finished_at, *elapsed, error)
        }
    };
    notifier.notify(&text);

    outcome
}
