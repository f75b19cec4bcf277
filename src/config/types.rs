//! Configuration types and defaults for mobitor.

use crate::exit_codes;
use crate::monitor::ExecutionOutcome;
use serde::Deserialize;

/// How a log record's `levelname` is compared against `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeverityMatch {
    /// Only the literal `ERROR` triggers an alert (default).
    #[default]
    Exact,
    /// `error`, `Error`, ... also trigger an alert.
    CaseInsensitive,
}

impl SeverityMatch {
    /// Parse a severity match policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(Self::Exact),
            "case_insensitive" | "case-insensitive" => Some(Self::CaseInsensitive),
            _ => None,
        }
    }

    /// Returns true if `levelname` denotes an error under this policy.
    pub fn matches(self, levelname: &str) -> bool {
        match self {
            Self::Exact => levelname == ERROR_LEVEL,
            Self::CaseInsensitive => levelname.eq_ignore_ascii_case(ERROR_LEVEL),
        }
    }
}

/// Whether mobitor's own exit code reflects the monitored command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExitCodePolicy {
    /// Always exit 0 once the terminal notification was attempted (default).
    #[default]
    AlwaysZero,
    /// Exit with the monitored command's code, or 127 if it never launched.
    Propagate,
}

impl ExitCodePolicy {
    /// Process exit code to report for a monitored outcome.
    ///
    /// Codes outside 1..=255 (e.g. negative signal codes) collapse to 1 so a
    /// failure is never reported as success.
    pub fn exit_code(self, outcome: &ExecutionOutcome) -> i32 {
        match (self, outcome) {
            (Self::AlwaysZero, _) => exit_codes::SUCCESS,
            (Self::Propagate, ExecutionOutcome::Succeeded { .. }) => exit_codes::SUCCESS,
            (Self::Propagate, ExecutionOutcome::Failed { exit_code, .. }) => {
                if (1..=255).contains(exit_code) {
                    *exit_code
                } else {
                    exit_codes::USER_ERROR
                }
            }
            (Self::Propagate, ExecutionOutcome::Crashed { .. }) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Severity name that marks a log record as alert-worthy.
pub const ERROR_LEVEL: &str = "ERROR";

/// Token used when neither the CLI nor the environment supplies one.
pub const PLACEHOLDER_TOKEN: &str = "<YOUR_SLACK_TOKEN>";

pub fn default_channel() -> String {
    "alerts".to_string()
}

pub fn default_username() -> String {
    "mobitor bot".to_string()
}

pub fn default_api_url() -> String {
    "https://slack.com/api/chat.postMessage".to_string()
}

pub fn default_token_env() -> String {
    "SLACK_TOKEN".to_string()
}

pub fn default_timeout_secs() -> u64 {
    10
}
