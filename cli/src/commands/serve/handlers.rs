//! # agentchat HTTP Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//!
//! ## Overview
//!
//! Request handlers mounted by `server_logic::create_app`:
//! - `GET /` → `chat_page`: the pre-rendered chat page
//! - `POST /api/chat` → `chat`: runs the responder on the posted conversation
//! - `GET /api/health` → `health`: liveness and version information
//!
//! Errors are returned as `AgentError` and converted here into
//! `{ "error": "..." }` bodies: caller mistakes become 400 with the specific
//! message, everything else becomes 500 with a generic message and is logged.
//!
use crate::agent::responder;
use crate::agent::wire::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, INTERNAL_ERROR};
use crate::core::error::AgentError;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat page HTML, rendered once at startup.
    pub page: Arc<str>,
    pub started_at: DateTime<Utc>,
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_client_error() {
            warn!("Rejected chat request: {}", self);
            (StatusCode::BAD_REQUEST, self.to_string())
        } else {
            error!("Error in chat API: {}", self);
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub async fn chat_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// # Chat Endpoint (`chat`)
///
/// Takes the raw body instead of axum's `Json` extractor so that every kind of
/// malformed input produces the same `{ error }` shape and a 400 status.
pub async fn chat(body: Bytes) -> Result<Json<ChatResponse>, AgentError> {
    let request = ChatRequest::from_body(&body)?;
    debug!("Chat request with {} message(s)", request.messages.len());
    let message = responder::respond(&request.messages)?;
    Ok(Json(ChatResponse { message }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
    })
}

/// # Panic Response (`handle_panic`)
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`. Logs the panic
/// payload and answers with the generic 500 body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_ERROR.to_string(),
        }),
    )
        .into_response()
}
