use thiserror::Error;

use crate::llm::ModelError;

/// Errors from storage gateway operations (used by trait definitions in
/// repaso-core, implemented over SQLite in repaso-infra).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from chat orchestration (ingestion, conversation, directory).
#[derive(Debug, Error)]
pub enum ChatError {
    /// The session has no active chat; the caller must ingest a note first.
    #[error("no active chat")]
    NoActiveChat,

    /// The requested chat does not exist or belongs to another session.
    #[error("chat not found")]
    ChatNotFound,

    /// A chat exists without its originating note (broken invariant).
    #[error("note not found for chat")]
    NoteNotFound,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
