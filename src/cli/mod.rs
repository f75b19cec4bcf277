//! CLI argument parsing for mobitor.
//!
//! Uses clap derive macros for declarative argument definitions. The four
//! modes are mutually exclusive; when several are given the first one in
//! [`Cli::mode`] order wins.

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Run a command and report its start and outcome to Slack.
///
/// Examples:
///   mobitor --command python my_script.py
///   mobitor make release
///   mobitor --message "Backup completed successfully!"
///   mobitor --error_message '{"levelname":"ERROR", ...}'
#[derive(Parser, Debug, Default)]
#[command(name = "mobitor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Message to send as-is.
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// JSON log record to send as an alert if its levelname is ERROR.
    #[arg(long = "error_message", visible_alias = "error-message", value_name = "JSON")]
    pub error_message: Option<String>,

    /// Command to run and monitor. Values end at the next mobitor flag.
    #[arg(long, num_args = 1.., value_name = "ARG")]
    pub command: Option<Vec<String>>,

    /// Slack token (defaults to the SLACK_TOKEN environment variable).
    #[arg(long = "webclient_token", visible_alias = "webclient-token", value_name = "TOKEN")]
    pub webclient_token: Option<String>,

    /// YAML settings file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Channel to post to (overrides the config file).
    #[arg(long, value_name = "NAME")]
    pub channel: Option<String>,

    /// Display name to post under (overrides the config file).
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// How to match ERROR in log records: exact or case-insensitive.
    #[arg(long, value_name = "POLICY")]
    pub severity_match: Option<String>,

    /// Exit with the monitored command's exit code instead of 0.
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Command to run and monitor, when --command is not used.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Send text directly, unformatted.
    Message(String),
    /// Route a JSON log record through the alert translator.
    ErrorAlert(String),
    /// Run and monitor a command.
    Monitor(Vec<String>),
    /// Nothing to do; print a usage hint.
    Usage,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` (program name first).
    ///
    /// `--command` values are collected up to the next long flag mobitor
    /// itself defines, so `--command make -j4 --channel ops` runs
    /// `make -j4` and still applies `--channel`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let (rest, command) = split_command_values(args, &known_long_flags()).ok_or_else(|| {
            Cli::command().error(
                clap::error::ErrorKind::TooFewValues,
                "--command requires at least one value",
            )
        })?;

        let mut cli = Self::try_parse_from(rest)?;
        if let Some(command) = command {
            cli.command = Some(command);
        }
        Ok(cli)
    }

    /// Resolve the invocation mode, first match wins.
    ///
    /// Empty values count as absent.
    pub fn mode(&self) -> Mode {
        if let Some(text) = self.message.as_ref().filter(|t| !t.is_empty()) {
            return Mode::Message(text.clone());
        }
        if let Some(raw) = self.error_message.as_ref().filter(|r| !r.is_empty()) {
            return Mode::ErrorAlert(raw.clone());
        }
        if let Some(command) = self.command.as_ref().filter(|c| !c.is_empty()) {
            return Mode::Monitor(command.clone());
        }
        if !self.args.is_empty() {
            return Mode::Monitor(self.args.clone());
        }
        Mode::Usage
    }
}

/// Long flag names (and aliases) defined on [`Cli`], including `--help`
/// and `--version`.
fn known_long_flags() -> Vec<String> {
    let mut cmd = Cli::command();
    cmd.build();

    cmd.get_arguments()
        .flat_map(|arg| {
            let mut names: Vec<String> = arg.get_long().map(str::to_string).into_iter().collect();
            names.extend(
                arg.get_all_aliases()
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string),
            );
            names
        })
        .collect()
}

/// Pull every `--command` occurrence and its values out of `args`.
///
/// Values run until a known long flag or `--`. Returns `None` when an
/// occurrence has no values.
fn split_command_values(
    args: Vec<OsString>,
    known: &[String],
) -> Option<(Vec<OsString>, Option<Vec<String>>)> {
    let is_known_flag = |arg: &OsString| {
        arg.to_str()
            .and_then(|s| s.strip_prefix("--"))
            .map(|name| name.split('=').next().unwrap_or(name))
            .is_some_and(|name| known.iter().any(|k| k == name))
    };

    let mut rest = Vec::with_capacity(args.len());
    let mut command: Option<Vec<String>> = None;
    let mut iter = args.into_iter().peekable();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            rest.push(arg);
            rest.extend(iter);
            break;
        }

        let inline = match arg.to_str() {
            Some("--command") => Some(None),
            Some(s) => s.strip_prefix("--command=").map(|v| Some(v.to_string())),
            None => None,
        };
        let Some(inline) = inline else {
            rest.push(arg);
            continue;
        };

        let mut values: Vec<String> = inline.into_iter().filter(|v| !v.is_empty()).collect();
        while let Some(next) = iter.peek() {
            if next == "--" || is_known_flag(next) {
                break;
            }
            if let Some(next) = iter.next() {
                values.push(next.to_string_lossy().into_owned());
            }
        }

        if values.is_empty() {
            return None;
        }
        command.get_or_insert_with(Vec::new).extend(values);
    }

    Some((rest, command))
}
