//! User session type for Repaso.
//!
//! A session is the anonymous identity of one browser. The client generates
//! an opaque token once and presents it on every request; the matching row
//! is created lazily on first sight. `active_chat_id` is the per-session
//! pointer to the chat currently receiving new turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An anonymous user session grouping chats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub id: Uuid,
    /// Opaque client-held identity token (unique).
    pub token: String,
    /// The chat currently receiving new turns, if any.
    pub active_chat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialize() {
        let session = UserSession {
            id: Uuid::now_v7(),
            token: "tok-123".to_string(),
            active_chat_id: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"token\":\"tok-123\""));
        assert!(json.contains("\"active_chat_id\":null"));
    }
}
