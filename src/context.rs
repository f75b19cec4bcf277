//! Execution context for a single mobitor invocation.
//!
//! Captures who is running what, where, and when. The context is built once
//! at the start of a session and never changes afterwards.

use chrono::{DateTime, Local};

/// Timestamp format used in every notification.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Host, user, and start time of a monitoring session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Machine name of the host running mobitor.
    pub host: String,
    /// Login name of the invoking user.
    pub user: String,
    /// Wall-clock time the session started.
    pub started_at: DateTime<Local>,
}

impl ExecutionContext {
    /// Create a context from explicit values.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        started_at: DateTime<Local>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            started_at,
        }
    }

    /// Capture the context from the current environment.
    pub fn capture() -> Self {
        Self::new(current_host(), current_user(), Local::now())
    }
}

/// Render a timestamp the way notifications display it.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

fn current_host() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn current_user() -> String {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
