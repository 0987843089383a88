//! Ingestion HTTP handlers.
//!
//! Endpoints:
//! - POST /subir-apunte - multipart PDF upload (field `archivo`)
//! - POST /subir-texto  - JSON `{texto}` with pasted text
//!
//! Both paths truncate the material, open a new chat for the session, store
//! the note, and point the session at the new chat. The chat id is not
//! returned; the frontend re-lists chats to discover it.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use repaso_types::chat::NoteSource;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionIdentity;
use crate::state::AppState;

/// Confirmation returned by both ingestion paths.
const UPLOAD_OK: &str = "✅ Apunte cargado correctamente, ya podés empezar el chat.";

/// Request body for the text ingestion endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadTextRequest {
    pub texto: String,
}

/// POST /subir-apunte - upload a PDF and start a new chat from it.
pub async fn upload_note(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut pdf_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Formulario inválido: {e}")))?
    {
        if field.name() == Some("archivo") {
            let bytes = field.bytes().await.map_err(|e| AppError::Internal {
                public: "Error al procesar el PDF",
                detail: format!("failed to read upload body: {e}"),
            })?;
            pdf_bytes = Some(bytes);
            break;
        }
    }

    let bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("Falta el archivo en el campo 'archivo'".to_string()))?;

    // Write the upload to a scoped temp file and extract on a blocking
    // thread; the file is removed on drop whether extraction succeeds or not.
    let text = tokio::task::spawn_blocking(move || -> Result<String, String> {
        let mut tmp = NamedTempFile::new().map_err(|e| format!("temp file: {e}"))?;
        tmp.write_all(&bytes).map_err(|e| format!("temp write: {e}"))?;
        repaso_infra::pdf::extract_text(tmp.path()).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::Internal {
        public: "Error al procesar el PDF",
        detail: format!("extraction task panicked: {e}"),
    })?
    .map_err(|detail| AppError::Internal {
        public: "Error al procesar el PDF",
        detail,
    })?;

    let chat = state
        .quiz_service
        .ingest(&session, NoteSource::Pdf, &text)
        .await?;
    tracing::info!(chat_id = %chat.id, "PDF ingested");

    Ok(Json(json!({ "mensaje": UPLOAD_OK })))
}

/// POST /subir-texto - paste raw text and start a new chat from it.
pub async fn upload_text(
    State(state): State<AppState>,
    SessionIdentity(session): SessionIdentity,
    Json(body): Json<UploadTextRequest>,
) -> Result<Json<Value>, AppError> {
    if body.texto.trim().is_empty() {
        return Err(AppError::Validation("Texto vacío".to_string()));
    }

    let chat = state
        .quiz_service
        .ingest(&session, NoteSource::Text, &body.texto)
        .await?;
    tracing::info!(chat_id = %chat.id, "Text ingested");

    Ok(Json(json!({ "mensaje": UPLOAD_OK })))
}
