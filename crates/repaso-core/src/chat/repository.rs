//! ChatRepository trait definition.
//!
//! The storage gateway: create/read/update operations over sessions, chats,
//! notes, and messages. Implementations live in repaso-infra
//! (e.g., `SqliteChatRepository`).

use repaso_types::chat::{Chat, ChatMessage, Note};
use repaso_types::error::StorageError;
use repaso_types::session::UserSession;
use uuid::Uuid;

/// Repository trait for session, chat, note, and message persistence.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Resolve a session by its client token, creating the row on first sight.
    ///
    /// Idempotent per token: presenting the same token twice returns the
    /// same session.
    fn get_or_create_session(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<UserSession, StorageError>> + Send;

    /// Set (or clear, with `None`) the session's active-chat pointer.
    fn set_active_chat(
        &self,
        session_id: &Uuid,
        chat_id: Option<&Uuid>,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Persist a new chat.
    fn create_chat(
        &self,
        chat: &Chat,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Persist the originating note for a chat.
    fn insert_note(
        &self,
        note: &Note,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Get the note for a chat.
    fn get_note(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Note>, StorageError>> + Send;

    /// Append a message to a chat's log.
    fn insert_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Get a chat's messages, ordered by created_at ASC.
    fn get_messages(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, StorageError>> + Send;

    /// List a session's chats, ordered by created_at DESC (newest first).
    fn list_chats(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Chat>, StorageError>> + Send;

    /// Find a chat by id, scoped to a session.
    ///
    /// A chat belonging to a different session is a miss, not an error.
    fn find_chat(
        &self,
        session_id: &Uuid,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, StorageError>> + Send;
}
