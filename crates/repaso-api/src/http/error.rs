//! Application error type mapping to HTTP status codes.
//!
//! Every failure leaves the handler as an [`AppError`]; `IntoResponse` logs
//! the diagnostic detail server-side and returns the caller a flat
//! `{"error": "<message>"}` body. No structured error codes reach the UI.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use repaso_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad or missing input.
    Validation(String),
    /// Lookup miss.
    NotFound(String),
    /// Chat orchestration failure.
    Chat(ChatError),
    /// Anything else; `public` is what the caller sees, `detail` is logged.
    Internal {
        public: &'static str,
        detail: String,
    },
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Chat(ChatError::NoActiveChat) => (
                StatusCode::BAD_REQUEST,
                "No hay chat activo. Por favor, sube un apunte primero.".to_string(),
            ),
            AppError::Chat(ChatError::ChatNotFound) => {
                (StatusCode::NOT_FOUND, "Chat no encontrado".to_string())
            }
            AppError::Chat(ChatError::Model(e)) => {
                tracing::error!(error = %e, "Model gateway failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error al generar la respuesta".to_string(),
                )
            }
            AppError::Chat(e) => {
                tracing::error!(error = %e, "Chat orchestration failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            AppError::Internal { public, detail } => {
                tracing::error!(detail = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, (*public).to_string())
            }
        };

        if status.is_client_error() {
            tracing::debug!(%status, %message, "Request rejected");
        }

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repaso_types::error::StorageError;
    use repaso_types::llm::ModelError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("Texto vacío".to_string());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_active_chat_maps_to_400() {
        assert_eq!(
            status_of(AppError::Chat(ChatError::NoActiveChat)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_chat_not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::Chat(ChatError::ChatNotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_backend_failures_map_to_500() {
        let storage: ChatError = StorageError::Connection.into();
        assert_eq!(
            status_of(AppError::Chat(storage)),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let model: ChatError = ModelError::Exhausted { attempts: 2 }.into();
        assert_eq!(
            status_of(AppError::Chat(model)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
