//! Dispatcher — task-per-channel fan-out of one relayed message.
//!
//! Every destination channel gets its own tokio task, so one slow or
//! failing delivery never blocks the others. A semaphore bounds how many
//! deliveries run at once; tasks past the bound queue on the permit, they
//! are never dropped.
//!
//! The join handles are returned to the caller. The HTTP handler drops
//! them (fire-and-forget contract: the response never waits on delivery),
//! while tests await them to observe completion.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use slackgw_core::types::{MessageFormat, OutboundMessage};

use crate::mentions::MentionResolver;
use crate::sink::MessageSink;

/// Fans one composed message out to N channels through a `MessageSink`.
pub struct Dispatcher {
    sink: Arc<dyn MessageSink>,
    resolver: Option<Arc<MentionResolver>>,
    permits: Arc<Semaphore>,
}

impl Dispatcher {
    /// Create a dispatcher. `max_concurrent` bounds simultaneous deliveries
    /// and must be at least 1 (the config loader enforces this).
    pub fn new(
        sink: Arc<dyn MessageSink>,
        resolver: Option<Arc<MentionResolver>>,
        max_concurrent: usize,
    ) -> Self {
        Dispatcher {
            sink,
            resolver,
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Spawn one independent delivery task per channel.
    ///
    /// Mention markers are rewritten inside each task, after composition
    /// and before the send. Delivery outcome is logged; failures are
    /// terminal for their channel only.
    pub fn dispatch(
        &self,
        format: MessageFormat,
        channels: &[String],
        body: &str,
    ) -> Vec<JoinHandle<()>> {
        channels
            .iter()
            .map(|channel| {
                let sink = self.sink.clone();
                let resolver = self.resolver.clone();
                let permits = self.permits.clone();
                let channel = channel.clone();
                let body = body.to_string();

                tokio::spawn(async move {
                    // Never fails: the semaphore is owned by the dispatcher
                    // and never closed.
                    let Ok(_permit) = permits.acquire_owned().await else {
                        return;
                    };

                    let body = match &resolver {
                        Some(r) => r.resolve(&body).await,
                        None => body,
                    };

                    let msg = OutboundMessage::new(format, channel, body);
                    match sink.send(&msg).await {
                        Ok(()) => debug!(channel = %msg.channel, "dispatch complete"),
                        Err(e) => error!(
                            channel = %msg.channel,
                            error = %e,
                            "dispatch failed, message dropped for this channel"
                        ),
                    }
                })
            })
            .collect()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
