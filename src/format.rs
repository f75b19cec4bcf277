//! Notification text templates.
//!
//! Every function here is pure: the same inputs always produce the same
//! string. Text uses Slack mrkdwn (`*bold*`, `` `code` ``, ```` ``` ```` blocks).
//! Captured stderr and exception text are embedded verbatim, so unusual
//! content can break the markup.

use crate::alert::LogRecord;
use crate::context::{ExecutionContext, format_timestamp};
use crate::monitor::MonitoredCommand;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Announce that `command` is about to start.
pub fn format_start(command: &MonitoredCommand, ctx: &ExecutionContext) -> String {
    format!(
        "*Process Started*: `{}` at `{}` on `{}@{}`",
        command.display(),
        format_timestamp(&ctx.started_at),
        ctx.host,
        ctx.user
    )
}

/// Report a zero exit status.
pub fn format_success(
    command: &MonitoredCommand,
    ctx: &ExecutionContext,
    finished_at: &DateTime<Local>,
    elapsed: Duration,
) -> String {
    format!(
        "*Process Completed Successfully*: `{}` at `{}` on `{}@{}` in {} minutes",
        command.display(),
        format_timestamp(finished_at),
        ctx.host,
        ctx.user,
        format_minutes(elapsed)
    )
}

/// Report a non-zero exit status with the captured stderr.
pub fn format_failure(
    command: &MonitoredCommand,
    ctx: &ExecutionContext,
    finished_at: &DateTime<Local>,
    exit_code: i32,
    elapsed: Duration,
    stderr: &str,
) -> String {
    format!(
        "*Process Failed*: `{}` with exit code {} at `{}` on `{}` by `{}` in {} minutes \n*Error*: ```{}```",
        command.display(),
        exit_code,
        format_timestamp(finished_at),
        ctx.host,
        ctx.user,
        format_minutes(elapsed),
        stderr
    )
}

/// Report a command that could not be launched.
pub fn format_crash(
    command: &MonitoredCommand,
    ctx: &ExecutionContext,
    finished_at: &DateTime<Local>,
    elapsed: Duration,
    error: &str,
) -> String {
    format!(
        "*Error Running Process*: `{}` at `{}` on `{}@{}` in {} minutes  \n*Exception*: ```{}```",
        command.display(),
        format_timestamp(finished_at),
        ctx.host,
        ctx.user,
        format_minutes(elapsed),
        error
    )
}

/// Render an error-level log record. Host and user are those of the
/// machine sending the alert.
pub fn format_error_alert(record: &LogRecord, ctx: &ExecutionContext) -> String {
    format!(
        "*Error*: {} in `{}` at line {} at `{}` on `{}` by `{}`",
        record.message, record.filename, record.lineno, record.asctime, ctx.host, ctx.user
    )
}

/// Elapsed time in minutes with two decimals.
pub fn format_minutes(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64() / 60.0)
}
