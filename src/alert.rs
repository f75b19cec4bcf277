//! Log-record alert translation.
//!
//! A log record arrives as a JSON object (typically a Python `logging`
//! record serialized by a JSON formatter). Only error-level records become
//! alerts; every other record, and any input that fails to parse, is
//! dropped without surfacing an error to the caller.

use crate::config::SeverityMatch;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::format::format_error_alert;
use crate::notify::Notifier;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A structured diagnostic entry.
///
/// All five keys are required; extra keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    /// Severity name, e.g. `ERROR` or `WARNING`.
    pub levelname: String,
    pub message: Field,
    pub filename: Field,
    pub lineno: Field,
    pub asctime: Field,
}

/// A record value rendered as-is when it is a string, `None`/`True`/`False`
/// for JSON `null` and booleans (the way the Python logger that wrote the
/// record spells them), or as JSON text otherwise (so `42` renders as `42`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Field(Value);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            other => write!(f, "{}", other),
        }
    }
}

/// Parse raw text into a log record.
pub fn parse_record(raw: &str) -> Result<LogRecord> {
    let record: LogRecord = serde_json::from_str(raw)?;
    Ok(record)
}

/// Produce alert text for `raw` if it is an error-level record.
pub fn translate(raw: &str, policy: SeverityMatch, ctx: &ExecutionContext) -> Option<String> {
    let record = match parse_record(raw) {
        Ok(record) => record,
        Err(e) => {
            debug!(error = %e, "Ignoring unparseable log record");
            return None;
        }
    };

    if !policy.matches(&record.levelname) {
        debug!(levelname = %record.levelname, "Ignoring non-error log record");
        return None;
    }

    Some(format_error_alert(&record, ctx))
}

/// Translate `raw` and forward the alert, if any, through `notifier`.
///
/// Returns true when an alert was handed to the notifier.
pub fn send_error_alert(raw: &str, policy: SeverityMatch, notifier: &Notifier) -> bool {
    let ctx = ExecutionContext::capture();
    match translate(raw, policy, &ctx) {
        Some(text) => {
            notifier.notify(&text);
            true
        }
        None => false,
    }
}
