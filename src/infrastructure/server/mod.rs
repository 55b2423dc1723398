//! Webhook server - HTTP shell around the dispatch pipeline

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::application::errors::BotError;
use crate::application::messaging::{EventDispatcher, WebhookPayload};

/// Fixed acknowledgment body for recognized deliveries
const EVENT_RECEIVED: &str = "EVENT_RECEIVED";

/// Shared state for the HTTP handlers
pub struct AppState {
    pub verify_token: String,
    pub dispatcher: Arc<EventDispatcher>,
}

/// Verification query parameters sent by the platform
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

/// Build the webhook router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<(), BotError> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| BotError::Network(format!("Failed to bind port {}: {}", port, e)))?;

    tracing::info!("Server is running on port {}", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| BotError::Network(e.to_string()))
}

/// Check a subscription handshake against the configured secret.
///
/// Returns the challenge to echo back when the mode is `subscribe` and
/// the token matches.
fn check_subscription(params: &VerifyParams, expected_token: &str) -> Option<String> {
    let mode = params.mode.as_deref()?;
    let token = params.verify_token.as_deref()?;
    let challenge = params.challenge.as_deref()?;

    if mode == "subscribe" && token == expected_token {
        Some(challenge.to_string())
    } else {
        None
    }
}

/// GET /webhook - subscription verification handshake
async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyParams>,
) -> Response {
    match check_subscription(&params, &state.verify_token) {
        Some(challenge) => {
            tracing::info!("webhook verified");
            (StatusCode::OK, challenge).into_response()
        }
        None => {
            tracing::warn!("webhook verification rejected");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// POST /webhook - event delivery.
///
/// Acknowledges the platform as soon as the envelope is recognized as
/// page-scoped; the reply pipeline runs on detached tasks, so delivery
/// failures never affect this response.
async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WebhookPayload>,
) -> Response {
    if !payload.is_page_scoped() {
        tracing::warn!(object = %payload.object, "unrecognized webhook payload");
        return StatusCode::NOT_FOUND.into_response();
    }

    for event in payload.events() {
        let dispatcher = state.dispatcher.clone();
        tokio::spawn(async move {
            dispatcher.dispatch(event).await;
        });
    }

    (StatusCode::OK, EVENT_RECEIVED).into_response()
}
