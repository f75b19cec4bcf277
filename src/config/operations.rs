//! Config loading, validation, and credential resolution.

use super::model::Config;
use super::types::PLACEHOLDER_TOKEN;
use crate::error::{MobitorError, Result};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MobitorError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MobitorError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.channel.trim().is_empty() {
            return Err(MobitorError::UserError(
                "config validation failed: channel must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(MobitorError::UserError(
                "config validation failed: timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(MobitorError::UserError(format!(
                "config validation failed: api_url must be an http(s) URL (found '{}')",
                self.api_url
            )));
        }

        Ok(())
    }

    /// Timeout for a single delivery attempt.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the notifier credential.
    ///
    /// An explicit CLI token wins, then the `token_env` variable, then a
    /// placeholder that the backend will reject.
    pub fn resolve_token(&self, cli_token: Option<&str>) -> String {
        if let Some(token) = cli_token {
            return token.to_string();
        }

        std::env::var(&self.token_env).unwrap_or_else(|_| PLACEHOLDER_TOKEN.to_string())
    }
}
