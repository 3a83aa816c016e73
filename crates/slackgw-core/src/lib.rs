//! Slackgw Core — configuration and shared types.
//!
//! This crate provides:
//! - **config**: `Config` loaded from `SLACKGW_*` environment variables
//! - **types**: the request/message shapes shared by the server and the
//!   Slack dispatch crate

pub mod config;
pub mod types;

pub use config::{Config, ConfigError};
pub use types::{MessageFormat, OutboundMessage, RelayRequest};
