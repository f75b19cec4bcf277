//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for mobitor.
///
/// This struct represents the contents of the optional `--config` YAML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Destination
    // =========================================================================
    /// Channel that receives every notification.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Display name the notifications are posted under.
    #[serde(default = "default_username")]
    pub username: String,

    /// Endpoint implementing Slack's `chat.postMessage`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Environment variable holding the default token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// HTTP timeout for one delivery attempt.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // =========================================================================
    // Policies
    // =========================================================================
    /// Which `levelname` values count as errors for log-record alerts.
    #[serde(default)]
    pub severity_match: SeverityMatch,

    /// Whether the process exit code follows the monitored command.
    #[serde(default)]
    pub exit_code: ExitCodePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            username: default_username(),
            api_url: default_api_url(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
            severity_match: SeverityMatch::default(),
            exit_code: ExitCodePolicy::default(),
        }
    }
}
