//! Chat directory HTTP handlers.
//!
//! Endpoints:
//! - GET  /chats       - list the session's chats, newest first
//! - POST /select-chat - make a chat the session's active chat
//! - POST /reset       - clear the session's active chat

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionIdentity;
use crate::state::AppState;

/// Request body for chat selection.
#[derive(Debug, Deserialize)]
pub struct SelectChatRequest {
    #[serde(rename = "chatId")]
    pub chat_id: String,
}

/// GET /chats - list the session's chats, newest first.
pub async fn list_chats(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
) -> Result<Json<Value>, AppError> {
    let chats = state.quiz_service.list_chats(&session).await?;

    let chats: Vec<Value> = chats
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "title": c.title,
                "created_at": c.created_at,
            })
        })
        .collect();

    Ok(Json(json!({ "chats": chats })))
}

/// POST /select-chat - set the active chat and return its messages.
///
/// 404 when the chat does not exist or belongs to another session; the
/// active-chat pointer is left unchanged in that case.
pub async fn select_chat(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
    Json(body): Json<SelectChatRequest>,
) -> Result<Json<Value>, AppError> {
    let chat_id = Uuid::parse_str(body.chat_id.trim())
        .map_err(|_| AppError::Validation("chatId inválido".to_string()))?;

    let messages = state.quiz_service.select_chat(&session, &chat_id).await?;

    Ok(Json(json!({
        "mensaje": format!("Chat {chat_id} seleccionado"),
        "messages": messages,
    })))
}

/// POST /reset - clear the session's active chat.
pub async fn reset(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
) -> Result<Json<Value>, AppError> {
    state.quiz_service.reset(&session).await?;

    Ok(Json(json!({ "mensaje": "Historial reseteado." })))
}
