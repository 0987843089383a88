//! Conversation HTTP handler.
//!
//! POST /chat - run one conversation turn against the session's active chat.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::AppError;
use crate::http::extractors::session::SessionIdentity;
use crate::state::AppState;

/// Request body for the conversation endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub mensaje: String,
}

/// POST /chat - append a user turn, ask the model, return the reply.
///
/// 400 when the session has no active chat (nothing has been ingested or
/// the history was reset).
pub async fn send_message(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
    Json(body): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    let respuesta = state
        .quiz_service
        .send_message(&session, &body.mensaje)
        .await?;

    Ok(Json(json!({ "respuesta": respuesta })))
}
