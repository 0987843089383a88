//! Chat, note, and message types for Repaso.
//!
//! A chat is one note-plus-conversation unit: every ingestion creates a new
//! chat with exactly one originating note, and the conversation is an
//! append-only message log ordered by creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

// Re-export MessageRole from the llm module (persisted messages and model
// turns share the same role vocabulary).
pub use crate::llm::MessageRole;

/// Where a note's content came from.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (source IN ('pdf', 'text'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    Pdf,
    Text,
}

impl fmt::Display for NoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSource::Pdf => write!(f, "pdf"),
            NoteSource::Text => write!(f, "text"),
        }
    }
}

impl FromStr for NoteSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(NoteSource::Pdf),
            "text" => Ok(NoteSource::Text),
            other => Err(format!("invalid note source: '{other}'")),
        }
    }
}

/// One note-plus-conversation unit belonging to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub session_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// The reference material a chat quizzes against.
///
/// Content is truncated to the ingestion limit before it reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub source: NoteSource,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A single persisted message within a chat.
///
/// Messages are immutable once written and ordered by `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
