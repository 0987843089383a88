//! Quiz service orchestrating ingestion, conversation, and the chat directory.
//!
//! QuizService coordinates the storage repository and the model gateway:
//! ingesting notes (new chat + note + active-chat pointer), running one
//! conversation turn (persist user message, call the model, persist the
//! reply), and listing/selecting chats for a session.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use repaso_types::chat::{Chat, ChatMessage, MessageRole, Note, NoteSource};
use repaso_types::error::ChatError;
use repaso_types::session::UserSession;

use crate::chat::prompt::build_conversation;
use crate::chat::repository::ChatRepository;
use crate::ingest::{truncate_chars, MAX_NOTE_CHARS};
use crate::llm::gateway::ModelGateway;

/// Title given to every chat created by ingestion.
pub const DEFAULT_CHAT_TITLE: &str = "Chat de apuntes";

/// Substituted when the model answers with no content.
pub const FALLBACK_REPLY: &str = "⚠️ No entendí la respuesta";

/// Orchestrates the quiz conversation flow.
///
/// Generic over `ChatRepository` and `ModelGateway` to maintain clean
/// architecture (repaso-core never depends on repaso-infra).
pub struct QuizService<R: ChatRepository, G: ModelGateway> {
    repo: R,
    gateway: G,
}

impl<R: ChatRepository, G: ModelGateway> QuizService<R, G> {
    /// Create a new quiz service with the given repository and gateway.
    pub fn new(repo: R, gateway: G) -> Self {
        Self { repo, gateway }
    }

    /// Access the storage repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    // --- Ingestion ---

    /// Ingest reference material: truncate it, open a new chat for the
    /// session, persist the note, and point the session at the new chat.
    ///
    /// Every ingestion starts a fresh chat; uploads never append to an
    /// existing one.
    pub async fn ingest(
        &self,
        session: &UserSession,
        source: NoteSource,
        content: &str,
    ) -> Result<Chat, ChatError> {
        let content = truncate_chars(content, MAX_NOTE_CHARS);

        let chat = Chat {
            id: Uuid::now_v7(),
            session_id: session.id,
            title: DEFAULT_CHAT_TITLE.to_string(),
            created_at: Utc::now(),
        };
        self.repo.create_chat(&chat).await?;

        let note = Note {
            id: Uuid::now_v7(),
            chat_id: chat.id,
            source,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.repo.insert_note(&note).await?;

        self.repo
            .set_active_chat(&session.id, Some(&chat.id))
            .await?;

        info!(chat_id = %chat.id, %source, chars = content.chars().count(), "Note ingested");
        Ok(chat)
    }

    // --- Conversation ---

    /// Run one conversation turn against the session's active chat.
    ///
    /// Persists the user message, sends the full context (system turn built
    /// from the chat's note, then the persisted history, then this message)
    /// to the model, persists the reply, and returns it. An empty model
    /// reply is replaced with [`FALLBACK_REPLY`].
    ///
    /// Fails with [`ChatError::NoActiveChat`] before any write when the
    /// session has no active chat.
    pub async fn send_message(
        &self,
        session: &UserSession,
        text: &str,
    ) -> Result<String, ChatError> {
        let chat_id = session.active_chat_id.ok_or(ChatError::NoActiveChat)?;

        let note = self
            .repo
            .get_note(&chat_id)
            .await?
            .ok_or(ChatError::NoteNotFound)?;
        let history = self.repo.get_messages(&chat_id).await?;

        self.repo
            .insert_message(&ChatMessage {
                id: Uuid::now_v7(),
                chat_id,
                role: MessageRole::User,
                content: text.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        let turns = build_conversation(&note.content, &history, text);
        let reply = self.gateway.complete(&turns).await?;
        let reply = if reply.trim().is_empty() {
            warn!(chat_id = %chat_id, "Model returned empty content, using fallback");
            FALLBACK_REPLY.to_string()
        } else {
            reply
        };

        self.repo
            .insert_message(&ChatMessage {
                id: Uuid::now_v7(),
                chat_id,
                role: MessageRole::Assistant,
                content: reply.clone(),
                created_at: Utc::now(),
            })
            .await?;

        Ok(reply)
    }

    // --- Directory ---

    /// List the session's chats, newest first.
    pub async fn list_chats(&self, session: &UserSession) -> Result<Vec<Chat>, ChatError> {
        Ok(self.repo.list_chats(&session.id).await?)
    }

    /// Select a chat as the session's active chat and return its messages.
    ///
    /// A chat id that does not belong to the session fails with
    /// [`ChatError::ChatNotFound`] and leaves the pointer unchanged.
    pub async fn select_chat(
        &self,
        session: &UserSession,
        chat_id: &Uuid,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let chat = self
            .repo
            .find_chat(&session.id, chat_id)
            .await?
            .ok_or(ChatError::ChatNotFound)?;

        self.repo
            .set_active_chat(&session.id, Some(&chat.id))
            .await?;
        info!(chat_id = %chat.id, session_id = %session.id, "Chat selected");

        Ok(self.repo.get_messages(&chat.id).await?)
    }

    /// Clear the session's active-chat pointer.
    pub async fn reset(&self, session: &UserSession) -> Result<(), ChatError> {
        self.repo.set_active_chat(&session.id, None).await?;
        info!(session_id = %session.id, "Active chat cleared");
        Ok(())
    }
}
