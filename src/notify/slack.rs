//! A transport that posts messages through Slack's Web API.

use super::{Message, Transport};
use crate::error::{MobitorError, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Posts to `chat.postMessage` with a bearer token.
pub struct SlackTransport {
    api_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

/// The subset of a Web API response we inspect.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackTransport {
    /// Creates a new `SlackTransport`.
    pub fn new(api_url: String, token: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MobitorError::UserError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_url,
            token,
            client,
        })
    }
}

impl Transport for SlackTransport {
    #[instrument(skip(self, message), fields(channel = %message.channel))]
    fn post(&self, message: &Message) -> Result<()> {
        let payload = json!({
            "channel": message.channel,
            "text": message.text,
            "username": message.username,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .inspect_err(|e| error!(error = %e, "HTTP request to Slack failed"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(MobitorError::Delivery(format!(
                "status {}, body: {}",
                status, text
            )));
        }

        // Slack reports API-level failures with HTTP 200 and `"ok": false`.
        let body: ApiResponse = response.json()?;
        if !body.ok {
            return Err(MobitorError::Delivery(
                body.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        info!("Successfully sent message to Slack.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn message() -> Message {
        Message {
            channel: "alerts".to_string(),
            username: "mobitor bot".to_string(),
            text: "*Process Started*: `true`".to_string(),
        }
    }

    fn transport(server: &mockito::Server) -> SlackTransport {
        SlackTransport::new(
            format!("{}/api/chat.postMessage", server.url()),
            "xoxb-test".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_post_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::Json(json!({
                "channel": "alerts",
                "text": "*Process Started*: `true`",
                "username": "mobitor bot",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true,"channel":"C123","ts":"1.2"}"#)
            .create();

        let result = transport(&server).post(&message());

        assert!(result.is_ok());
        mock.assert();
    }

    #[test]
    fn test_post_api_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat.postMessage")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":false,"error":"channel_not_found"}"#)
            .create();

        let err = transport(&server).post(&message()).unwrap_err();

        assert!(matches!(err, MobitorError::Delivery(_)));
        assert!(err.to_string().contains("channel_not_found"));
    }

    #[test]
    fn test_post_server_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat.postMessage")
            .with_status(500)
            .with_body("upstream exploded")
            .create();

        let err = transport(&server).post(&message()).unwrap_err();

        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn test_post_unreachable_backend() {
        let transport = SlackTransport::new(
            "http://127.0.0.1:9/api/chat.postMessage".to_string(),
            "xoxb-test".to_string(),
            Duration::from_millis(500),
        )
        .unwrap();

        let err = transport.post(&message()).unwrap_err();
        assert!(matches!(err, MobitorError::Delivery(_)));
    }
}
