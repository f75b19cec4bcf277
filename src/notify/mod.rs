//! Outbound notifications.
//!
//! A [`Transport`] performs one delivery attempt and reports the outcome as
//! a typed result. The [`Notifier`] wraps a transport with a fixed channel
//! and display name, and absorbs every delivery failure: callers of
//! [`Notifier::notify`] never observe an error.

pub mod slack;

use crate::config::Config;
use crate::error::Result;
use tracing::{debug, error};

pub use slack::SlackTransport;

/// A single message handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub channel: String,
    pub username: String,
    pub text: String,
}

/// Something that can deliver a message to the messaging backend.
pub trait Transport: Send + Sync {
    /// Attempt delivery exactly once.
    fn post(&self, message: &Message) -> Result<()>;
}

/// Sends text to a fixed channel under a fixed display name.
pub struct Notifier {
    transport: Box<dyn Transport>,
    channel: String,
    username: String,
}

impl Notifier {
    /// Creates a new `Notifier`.
    pub fn new(
        transport: Box<dyn Transport>,
        channel: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            channel: channel.into(),
            username: username.into(),
        }
    }

    /// Build a Slack-backed notifier from configuration and a token.
    pub fn from_config(config: &Config, token: String) -> Result<Self> {
        let transport = SlackTransport::new(config.api_url.clone(), token, config.timeout())?;
        Ok(Self::new(
            Box::new(transport),
            config.channel.clone(),
            config.username.clone(),
        ))
    }

    /// Attempt delivery and return the typed result.
    pub fn try_notify(&self, text: &str) -> Result<()> {
        let message = Message {
            channel: self.channel.clone(),
            username: self.username.clone(),
            text: text.to_string(),
        };
        self.transport.post(&message)
    }

    /// Attempt delivery; failures are logged and swallowed.
    pub fn notify(&self, text: &str) {
        match self.try_notify(text) {
            Ok(()) => debug!(channel = %self.channel, "Notification delivered"),
            Err(e) => error!(channel = %self.channel, error = %e, "Error sending message to Slack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingTransport, RecordingTransport};

    #[test]
    fn test_notify_uses_fixed_destination() {
        let transport = RecordingTransport::new();
        let notifier = Notifier::new(Box::new(transport.clone()), "ops", "deploy bot");

        notifier.notify("hello");

        let sent = transport.messages();
        assert_eq!(
            sent,
            vec![Message {
                channel: "ops".to_string(),
                username: "deploy bot".to_string(),
                text: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn test_notify_makes_one_attempt_per_call() {
        let transport = FailingTransport::new("rate_limited");
        let notifier = Notifier::new(Box::new(transport.clone()), "ops", "bot");

        notifier.notify("one");
        notifier.notify("two");

        assert_eq!(transport.attempts(), 2);
    }

    #[test]
    fn test_try_notify_surfaces_error() {
        let transport = FailingTransport::new("invalid_auth");
        let notifier = Notifier::new(Box::new(transport), "ops", "bot");

        let err = notifier.try_notify("hello").unwrap_err();
        assert!(err.to_string().contains("invalid_auth"));
    }

    #[test]
    fn test_from_config_uses_configured_destination() {
        let config = Config {
            channel: "builds".to_string(),
            ..Default::default()
        };
        let notifier = Notifier::from_config(&config, "xoxb-test".to_string()).unwrap();

        assert_eq!(notifier.channel, "builds");
        assert_eq!(notifier.username, "mobitor bot");
    }
}
