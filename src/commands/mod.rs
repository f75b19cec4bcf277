//! Command implementations for mobitor.
//!
//! Builds the configuration and notifier once, then routes the selected
//! [`Mode`] to its handler. Returns the process exit code.

use crate::alert;
use crate::cli::{Cli, Mode};
use crate::config::{Config, ExitCodePolicy, SeverityMatch};
use crate::error::{MobitorError, Result};
use crate::exit_codes;
use crate::monitor::{self, MonitoredCommand};
use crate::notify::Notifier;
use tracing::{debug, info};

/// Printed when no mode was selected.
pub const USAGE_HINT: &str = "No valid arguments provided. Use --help for more information.";

/// Dispatch the parsed CLI to its implementation.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let mode = cli.mode();
    if mode == Mode::Usage {
        println!("{}", USAGE_HINT);
        return Ok(exit_codes::SUCCESS);
    }

    let config = build_config(&cli)?;
    let token = config.resolve_token(cli.webclient_token.as_deref());
    let notifier = Notifier::from_config(&config, token)?;

    run_mode(mode, &config, &notifier)
}

/// Run one mode against an already-built notifier.
pub fn run_mode(mode: Mode, config: &Config, notifier: &Notifier) -> Result<i32> {
    match mode {
        Mode::Message(text) => {
            notifier.notify(&text);
            Ok(exit_codes::SUCCESS)
        }
        Mode::ErrorAlert(raw) => {
            let forwarded = alert::send_error_alert(&raw, config.severity_match, notifier);
            debug!(forwarded, "Processed log record");
            Ok(exit_codes::SUCCESS)
        }
        Mode::Monitor(args) => {
            let command = MonitoredCommand::new(args)?;
            let outcome = monitor::run_and_monitor(&command, notifier);
            let code = config.exit_code.exit_code(&outcome);
            info!(exit_code = code, "Monitoring finished");
            Ok(code)
        }
        Mode::Usage => {
            println!("{}", USAGE_HINT);
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Load the config file (if any) and layer CLI overrides on top.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(channel) = &cli.channel {
        config.channel = channel.clone();
    }
    if let Some(username) = &cli.username {
        config.username = username.clone();
    }
    if let Some(policy) = &cli.severity_match {
        config.severity_match = SeverityMatch::from_str(policy).ok_or_else(|| {
            MobitorError::UserError(format!(
                "invalid --severity-match '{}': expected 'exact' or 'case-insensitive'",
                policy
            ))
        })?;
    }
    if cli.propagate_exit_code {
        config.exit_code = ExitCodePolicy::Propagate;
    }

    config.validate()?;
    Ok(config)
}
