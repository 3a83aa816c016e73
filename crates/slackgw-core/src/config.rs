//! Environment-based configuration.
//!
//! All settings come from `SLACKGW_*` environment variables and are read
//! once at startup into an immutable [`Config`] that is passed explicitly
//! to each component — no process-wide singletons.
//!
//! # Recognized variables
//! - `SLACKGW_TOKEN` — Slack bot token (required, non-empty)
//! - `SLACKGW_PORT` — listen port (default `8080`)
//! - `SLACKGW_DEBUG` — any non-empty value enables debug logging
//! - `SLACKGW_LOOKUP_URL` — identity-mapping base URL; setting it enables
//!   mention resolution
//! - `SLACKGW_MAX_CONCURRENT_SENDS` — bound on simultaneous outbound
//!   deliveries (default `32`)

use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SLACKGW";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bound on concurrent outbound deliveries.
pub const DEFAULT_MAX_CONCURRENT_SENDS: usize = 32;

/// Fatal configuration errors. Startup must abort before binding a
/// listener when one of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(String),

    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },
}

/// Validated application configuration. Immutable after load.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack bot token (secret).
    pub token: String,
    /// HTTP listen port.
    pub port: u16,
    /// Whether debug logging is enabled.
    pub debug: bool,
    /// Identity-mapping service base URL. `Some` enables mention resolution.
    pub lookup_url: Option<String>,
    /// Maximum number of simultaneous outbound deliveries.
    pub max_concurrent_sends: usize,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an injected variable lookup.
    ///
    /// The indirection keeps the loader testable without mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| format!("{ENV_PREFIX}_{suffix}");

        let token = lookup(&var("TOKEN"))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingVar(var("TOKEN")))?;

        let port = match lookup(&var("PORT")).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                var: var("PORT"),
                value: raw,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let debug = lookup(&var("DEBUG")).is_some_and(|v| !v.is_empty());

        let lookup_url = lookup(&var("LOOKUP_URL")).filter(|v| !v.is_empty());

        let max_concurrent_sends =
            match lookup(&var("MAX_CONCURRENT_SENDS")).filter(|v| !v.is_empty()) {
                Some(raw) => {
                    let n = raw
                        .parse::<usize>()
                        .map_err(|e| ConfigError::InvalidValue {
                            var: var("MAX_CONCURRENT_SENDS"),
                            value: raw.clone(),
                            reason: e.to_string(),
                        })?;
                    if n == 0 {
                        return Err(ConfigError::InvalidValue {
                            var: var("MAX_CONCURRENT_SENDS"),
                            value: raw,
                            reason: "must be at least 1".into(),
                        });
                    }
                    n
                }
                None => DEFAULT_MAX_CONCURRENT_SENDS,
            };

        Ok(Config {
            token,
            port,
            debug,
            lookup_url,
            max_concurrent_sends,
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
