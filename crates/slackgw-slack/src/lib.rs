//! Slackgw Slack — everything between the HTTP handler and Slack itself.
//!
//! This crate provides:
//! - **sink**: the `MessageSink` trait the dispatcher sends through
//! - **client**: `SlackClient` — `chat.postMessage` implementation of the sink
//! - **format**: pure message composition (topic prefix, plaintext fencing)
//! - **mentions**: `MentionResolver` — `gittoslack:<id>` marker rewriting
//! - **dispatcher**: task-per-channel fan-out with a concurrency bound

pub mod client;
pub mod dispatcher;
pub mod format;
pub mod mentions;
pub mod sink;

pub use client::SlackClient;
pub use dispatcher::Dispatcher;
pub use format::compose_message;
pub use mentions::MentionResolver;
pub use sink::MessageSink;
