//! Slack Web API client — `chat.postMessage` over REST.
//!
//! Markdown messages are sent as a single `section` block with `mrkdwn`
//! text; plaintext messages go out as a bare `text` payload. Slack reports
//! failures in-band (`ok: false` plus an `error` code), so the HTTP status
//! alone is not trusted.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use slackgw_core::types::{MessageFormat, OutboundMessage};

use crate::sink::MessageSink;

/// Slack Web API base URL.
const SLACK_API_BASE: &str = "https://slack.com/api";

/// Token-authenticated `chat.postMessage` client.
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl SlackClient {
    /// Create a client against the production Slack API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, SLACK_API_BASE)
    }

    /// Create a client against a custom API base (tests point this at a
    /// mock server).
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        SlackClient {
            http: reqwest::Client::new(),
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    /// Build the `chat.postMessage` request body for one message.
    fn build_payload(msg: &OutboundMessage) -> Value {
        match msg.format {
            MessageFormat::Markdown => json!({
                "channel": msg.channel,
                "blocks": [{
                    "type": "section",
                    "text": {
                        "type": "mrkdwn",
                        "text": msg.body,
                    },
                }],
            }),
            MessageFormat::Plaintext => json!({
                "channel": msg.channel,
                "text": msg.body,
            }),
        }
    }
}

#[async_trait]
impl MessageSink for SlackClient {
    async fn send(&self, msg: &OutboundMessage) -> anyhow::Result<()> {
        let resp = self
            .http
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(&self.token)
            .json(&Self::build_payload(msg))
            .send()
            .await?;

        let body: Value = resp.json().await?;
        if body["ok"].as_bool() != Some(true) {
            let err = body["error"].as_str().unwrap_or("unknown");
            anyhow::bail!("chat.postMessage failed: {}", err);
        }

        info!(
            channel = %msg.channel,
            ts = %body["ts"].as_str().unwrap_or(""),
            "message sent"
        );
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ── Payload shape ──

    #[test]
    fn test_markdown_payload_uses_section_block() {
        let msg = OutboundMessage::new(MessageFormat::Markdown, "C1", "*bold* text");
        let payload = SlackClient::build_payload(&msg);

        assert_eq!(payload["channel"], "C1");
        assert_eq!(payload["blocks"][0]["type"], "section");
        assert_eq!(payload["blocks"][0]["text"]["type"], "mrkdwn");
        assert_eq!(payload["blocks"][0]["text"]["text"], "*bold* text");
        assert!(payload.get("text").is_none());
    }

    #[test]
    fn test_plaintext_payload_is_bare_text() {
        let msg = OutboundMessage::new(MessageFormat::Plaintext, "C2", "```log\n```");
        let payload = SlackClient::build_payload(&msg);

        assert_eq!(payload["channel"], "C2");
        assert_eq!(payload["text"], "```log\n```");
        assert!(payload.get("blocks").is_none());
    }

    // ── Send path ──

    #[tokio::test]
    async fn test_send_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(header("authorization", "Bearer xoxb-test"))
            .and(body_partial_json(serde_json::json!({"channel": "C1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "channel": "C1",
                "ts": "1700000000.000100"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SlackClient::with_api_base("xoxb-test", server.uri());
        let msg = OutboundMessage::new(MessageFormat::Plaintext, "C1", "hello");
        client.send(&msg).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_surfaces_slack_error_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": false,
                "error": "channel_not_found"
            })))
            .mount(&server)
            .await;

        let client = SlackClient::with_api_base("xoxb-test", server.uri());
        let msg = OutboundMessage::new(MessageFormat::Markdown, "C404", "hello");
        let err = client.send(&msg).await.unwrap_err();
        assert!(err.to_string().contains("channel_not_found"));
    }

    #[tokio::test]
    async fn test_send_transport_error() {
        let client = SlackClient::with_api_base("xoxb-test", "http://127.0.0.1:1");
        let msg = OutboundMessage::new(MessageFormat::Markdown, "C1", "hello");
        assert!(client.send(&msg).await.is_err());
    }

    #[tokio::test]
    async fn test_send_non_json_response_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = SlackClient::with_api_base("xoxb-test", server.uri());
        let msg = OutboundMessage::new(MessageFormat::Plaintext, "C1", "hello");
        assert!(client.send(&msg).await.is_err());
    }
}
