//! Session identity extractor.
//!
//! Every session-scoped endpoint requires an `X-Session-Token` header: an
//! opaque UUID the frontend generates once and keeps in localStorage. The
//! matching session row is resolved (lazily created) per request, so there
//! is no process-global "current session".

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use repaso_core::chat::repository::ChatRepository;
use repaso_types::error::ChatError;
use repaso_types::session::UserSession;

use crate::http::error::AppError;
use crate::state::AppState;

/// The resolved session for this request.
pub struct SessionIdentity(pub UserSession);

impl FromRequestParts<AppState> for SessionIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;

        let session = state
            .quiz_service
            .repository()
            .get_or_create_session(&token)
            .await
            .map_err(|e| AppError::Chat(ChatError::from(e)))?;

        Ok(SessionIdentity(session))
    }
}

/// Pull and validate the session token header.
fn extract_token(parts: &Parts) -> Result<String, AppError> {
    let value = parts.headers.get("x-session-token").ok_or_else(|| {
        AppError::Validation("Falta la cabecera X-Session-Token".to_string())
    })?;

    let token = value
        .to_str()
        .map_err(|_| AppError::Validation("Token de sesión inválido".to_string()))?
        .trim();

    // Tokens are client-generated UUIDs; reject anything else early.
    Uuid::parse_str(token)
        .map_err(|_| AppError::Validation("Token de sesión inválido".to_string()))?;

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_header(value: &str) -> Parts {
        let request = Request::builder()
            .header("x-session-token", value)
            .body(())
            .unwrap();
        request.into_parts().0
    }

    #[test]
    fn test_valid_token_accepted() {
        let token = Uuid::now_v7().to_string();
        let parts = parts_with_header(&token);
        assert_eq!(extract_token(&parts).unwrap(), token);
    }

    #[test]
    fn test_missing_header_rejected() {
        let request = Request::builder().body(()).unwrap();
        let parts = request.into_parts().0;
        assert!(matches!(
            extract_token(&parts),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_non_uuid_token_rejected() {
        let parts = parts_with_header("not-a-uuid");
        assert!(matches!(
            extract_token(&parts),
            Err(AppError::Validation(_))
        ));
    }
}
