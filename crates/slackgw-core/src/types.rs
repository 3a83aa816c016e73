//! Shared message shapes — the inbound relay request and the per-channel
//! outbound message handed to the dispatcher.

use serde::Deserialize;

/// How the relayed message should be rendered on Slack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    /// Rich `mrkdwn` section block.
    Markdown,
    /// Plain text, fenced in a code block.
    Plaintext,
}

impl MessageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::Markdown => "markdown",
            MessageFormat::Plaintext => "plaintext",
        }
    }
}

/// Inbound relay request body.
///
/// Every field is defaulted so partial payloads decode; validation of the
/// channel list (possibly empty) happens downstream.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelayRequest {
    /// Destination Slack channel identifiers. One dispatch per entry.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Optional topic, prefixed onto the body as `"<topic> - <message>"`.
    #[serde(default)]
    pub topic: Option<String>,
}

/// One delivery unit: a composed body bound for a single channel.
#[derive(Clone, Debug)]
pub struct OutboundMessage {
    pub format: MessageFormat,
    pub channel: String,
    pub body: String,
}

impl OutboundMessage {
    pub fn new(
        format: MessageFormat,
        channel: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        OutboundMessage {
            format,
            channel: channel.into(),
            body: body.into(),
        }
    }
}
