//! Error types for mobitor.
//!
//! Uses thiserror for derive macros. Delivery and parse errors never reach
//! the user; they are logged and absorbed at the notifier and translator
//! boundaries.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mobitor operations.
#[derive(Error, Debug)]
pub enum MobitorError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The messaging backend could not be reached or rejected the message.
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// A log record could not be parsed.
    #[error("Invalid log record: {0}")]
    Parse(String),

    /// The monitored command could not be started or awaited.
    #[error("{0}")]
    Launch(String),
}

impl MobitorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MobitorError::UserError(_) => exit_codes::USER_ERROR,
            MobitorError::Delivery(_) => exit_codes::USER_ERROR,
            MobitorError::Parse(_) => exit_codes::USER_ERROR,
            MobitorError::Launch(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

impl From<reqwest::Error> for MobitorError {
    fn from(err: reqwest::Error) -> Self {
        MobitorError::Delivery(err.to_string())
    }
}

impl From<serde_json::Error> for MobitorError {
    fn from(err: serde_json::Error) -> Self {
        MobitorError::Parse(err.to_string())
    }
}

/// Result type alias for mobitor operations.
pub type Result<T> = std::result::Result<T, MobitorError>;
