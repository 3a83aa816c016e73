//! HTTP surface — two relay endpoints and nothing else.
//!
//! - `POST /` — relay with markdown formatting
//! - `POST /raw` — relay with plaintext (fenced) formatting
//! - non-POST on either path — `405` with a plain-text notice
//! - anything else — `404`
//!
//! Both handlers respond `200` with an empty body as soon as the dispatch
//! tasks are spawned. Delivery is fire-and-forget; the caller never learns
//! about downstream failures.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use slackgw_core::types::{MessageFormat, RelayRequest};
use slackgw_slack::{compose_message, Dispatcher};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        AppState { dispatcher }
    }
}

/// Build the relay router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(relay_markdown).fallback(method_not_supported))
        .route("/raw", post(relay_plaintext).fallback(method_not_supported))
        .fallback(not_found)
        .with_state(state)
}

async fn relay_markdown(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> StatusCode {
    relay(state, MessageFormat::Markdown, payload)
}

async fn relay_plaintext(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> StatusCode {
    relay(state, MessageFormat::Plaintext, payload)
}

fn relay(
    state: AppState,
    format: MessageFormat,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> StatusCode {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(format = format.as_str(), error = %rejection, "rejecting undecodable relay request");
            return StatusCode::BAD_REQUEST;
        }
    };

    let body = compose_message(format, &request.message, request.topic.as_deref());

    info!(
        format = format.as_str(),
        channels = request.channels.len(),
        "relaying message"
    );

    // Fire-and-forget: handles are dropped, the tasks run to completion on
    // their own and the response does not wait for delivery.
    let _handles = state.dispatcher.dispatch(format, &request.channels, &body);

    StatusCode::OK
}

async fn method_not_supported() -> (StatusCode, &'static str) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "Sorry, only the POST method is supported.",
    )
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 not found.")
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
