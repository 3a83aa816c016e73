//! MessageSink trait — the seam between the dispatcher and the Slack client.
//!
//! The dispatcher only ever talks to `Arc<dyn MessageSink>`, so tests can
//! swap in mocks and inject per-channel failures.

use async_trait::async_trait;
use slackgw_core::types::OutboundMessage;

/// A destination that can deliver one outbound message.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver a single message to its channel.
    ///
    /// An error is terminal for that one delivery; callers must not let it
    /// affect deliveries to other channels.
    async fn send(&self, msg: &OutboundMessage) -> anyhow::Result<()>;
}
