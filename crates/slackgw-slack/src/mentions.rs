//! Mention resolution — rewrites `gittoslack:<id>` markers into Slack
//! mentions via an external identity-mapping service.
//!
//! The service is queried as `GET <lookup_url>?github_id=eq.<id>` and
//! returns a JSON array of `{github_id, slack_id}` records. Exactly one
//! record resolves the marker to `<@slack_id>`; anything else fails open
//! and the bare id is passed through so a lookup outage never drops a
//! relayed message.
//!
//! Tokenization splits on single spaces only. A marker carrying a
//! comma-separated value list (`gittoslack:a,b`) resolves the first value
//! only; multi-target lists per token are not supported.

use anyhow::Context;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

/// One identity-mapping record from the lookup service.
#[derive(Debug, Clone, Deserialize)]
struct UserMapping {
    github_id: String,
    slack_id: String,
}

/// Resolves mention markers against the identity-mapping service.
pub struct MentionResolver {
    http: reqwest::Client,
    lookup_url: String,
    marker: Regex,
}

impl MentionResolver {
    /// Create a resolver querying the given base URL.
    pub fn new(lookup_url: impl Into<String>) -> Self {
        MentionResolver {
            http: reqwest::Client::new(),
            lookup_url: lookup_url.into(),
            // First comma-separated value after the marker prefix.
            marker: Regex::new(r"^gittoslack:([^,]*)").unwrap(),
        }
    }

    /// Rewrite every mention marker in `message`, leaving other tokens
    /// untouched. Never fails; lookup problems degrade to the bare id.
    pub async fn resolve(&self, message: &str) -> String {
        let mut out: Vec<String> = Vec::new();

        for token in message.split(' ') {
            match self.marker.captures(token) {
                Some(caps) => {
                    let github_id = &caps[1];
                    out.push(self.resolve_one(github_id).await);
                }
                None => out.push(token.to_string()),
            }
        }

        out.join(" ")
    }

    /// Resolve a single external id to a mention string, falling back to
    /// the id itself on error or ambiguity.
    async fn resolve_one(&self, github_id: &str) -> String {
        match self.fetch_mappings(github_id).await {
            Ok(mappings) if mappings.len() == 1 => {
                let mapping = &mappings[0];
                debug!(
                    github_id = %mapping.github_id,
                    slack_id = %mapping.slack_id,
                    "resolved mention marker"
                );
                format!("<@{}>", mapping.slack_id)
            }
            Ok(mappings) => {
                warn!(
                    github_id = %github_id,
                    matches = mappings.len(),
                    "mention lookup was not unique, passing id through"
                );
                github_id.to_string()
            }
            Err(e) => {
                warn!(
                    github_id = %github_id,
                    error = %e,
                    "mention lookup failed, passing id through"
                );
                github_id.to_string()
            }
        }
    }

    async fn fetch_mappings(&self, github_id: &str) -> anyhow::Result<Vec<UserMapping>> {
        let mappings = self
            .http
            .get(&self.lookup_url)
            .query(&[("github_id", format!("eq.{github_id}"))])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("lookup request to {} failed", self.lookup_url))?
            .json::<Vec<UserMapping>>()
            .await
            .context("lookup response was not a mapping array")?;

        Ok(mappings)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
