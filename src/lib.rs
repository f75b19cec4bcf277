//! Mobitor: run a command and report its start and outcome to Slack.
//!
//! Also forwards error-level JSON log records as alerts, and sends
//! free-form messages.

pub mod alert;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod monitor;
pub mod notify;

#[cfg(test)]
pub(crate) mod test_support;
