//! slackgw — HTTP-to-Slack relay.
//!
//! Accepts `POST /` (markdown) and `POST /raw` (plaintext) with a
//! `{channels, message, topic}` JSON body and fans the composed message
//! out to every listed Slack channel, best-effort. Configuration comes
//! from `SLACKGW_*` environment variables; see `slackgw-core::config`.

mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use slackgw_core::config::Config;
use slackgw_slack::{Dispatcher, MentionResolver, SlackClient};

use crate::routes::{build_router, AppState};

/// HTTP-to-Slack relay gateway.
#[derive(Parser)]
#[command(name = "slackgw", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (same effect as SLACKGW_DEBUG)
    #[arg(long, default_value_t = false)]
    logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration errors are fatal before anything binds.
    let config = Config::from_env().context("invalid configuration")?;

    init_logging(cli.logs || config.debug);
    if config.debug {
        tracing::debug!("debug logging enabled");
    }

    let sink: Arc<SlackClient> = Arc::new(SlackClient::new(&config.token));
    let resolver = config
        .lookup_url
        .as_deref()
        .map(|url| Arc::new(MentionResolver::new(url)));
    if resolver.is_some() {
        info!("mention resolution enabled");
    }

    let dispatcher = Arc::new(Dispatcher::new(
        sink,
        resolver,
        config.max_concurrent_sends,
    ));

    let app = build_router(AppState::new(dispatcher));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received Ctrl+C, shutting down");
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("slackgw=debug,info")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
