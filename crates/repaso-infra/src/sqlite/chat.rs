//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `repaso-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, reads on the reader
//! pool, writes on the single-connection writer pool.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use repaso_core::chat::repository::ChatRepository;
use repaso_types::chat::{Chat, ChatMessage, MessageRole, Note, NoteSource};
use repaso_types::error::StorageError;
use repaso_types::session::UserSession;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct UserSessionRow {
    id: String,
    token: String,
    active_chat_id: Option<String>,
    created_at: String,
}

impl UserSessionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            token: row.try_get("token")?,
            active_chat_id: row.try_get("active_chat_id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_session(self) -> Result<UserSession, StorageError> {
        let id = parse_uuid(&self.id, "session id")?;
        let active_chat_id = self
            .active_chat_id
            .as_deref()
            .map(|s| parse_uuid(s, "active_chat_id"))
            .transpose()?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(UserSession {
            id,
            token: self.token,
            active_chat_id,
            created_at,
        })
    }
}

struct ChatRow {
    id: String,
    session_id: String,
    title: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<Chat, StorageError> {
        Ok(Chat {
            id: parse_uuid(&self.id, "chat id")?,
            session_id: parse_uuid(&self.session_id, "session_id")?,
            title: self.title,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

struct NoteRow {
    id: String,
    chat_id: String,
    source: String,
    content: String,
    created_at: String,
}

impl NoteRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            source: row.try_get("source")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_note(self) -> Result<Note, StorageError> {
        let source: NoteSource = self
            .source
            .parse()
            .map_err(|e: String| StorageError::Query(e))?;

        Ok(Note {
            id: parse_uuid(&self.id, "note id")?,
            chat_id: parse_uuid(&self.chat_id, "chat_id")?,
            source,
            content: self.content,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

struct MessageRow {
    id: String,
    chat_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, StorageError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| StorageError::Query(e))?;

        Ok(ChatMessage {
            id: parse_uuid(&self.id, "message id")?,
            chat_id: parse_uuid(&self.chat_id, "chat_id")?,
            role,
            content: self.content,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_uuid(s: &str, field: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(s).map_err(|e| StorageError::Query(format!("invalid {field}: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// ChatRepository implementation
// ---------------------------------------------------------------------------

impl ChatRepository for SqliteChatRepository {
    async fn get_or_create_session(&self, token: &str) -> Result<UserSession, StorageError> {
        let row = sqlx::query("SELECT * FROM user_sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        if let Some(row) = row {
            let session_row =
                UserSessionRow::from_row(&row).map_err(|e| StorageError::Query(e.to_string()))?;
            return session_row.into_session();
        }

        // First sight of this token. A concurrent insert of the same token
        // loses to the UNIQUE constraint, so insert-or-ignore and re-select.
        sqlx::query(
            "INSERT INTO user_sessions (id, token, active_chat_id, created_at)
             VALUES (?, ?, NULL, ?)
             ON CONFLICT(token) DO NOTHING",
        )
        .bind(Uuid::now_v7().to_string())
        .bind(token)
        .bind(format_datetime(&Utc::now()))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM user_sessions WHERE token = ?")
            .bind(token)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        UserSessionRow::from_row(&row)
            .map_err(|e| StorageError::Query(e.to_string()))?
            .into_session()
    }

    async fn set_active_chat(
        &self,
        session_id: &Uuid,
        chat_id: Option<&Uuid>,
    ) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE user_sessions SET active_chat_id = ? WHERE id = ?")
            .bind(chat_id.map(Uuid::to_string))
            .bind(session_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn create_chat(&self, chat: &Chat) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO chats (id, session_id, title, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(chat.id.to_string())
        .bind(chat.session_id.to_string())
        .bind(&chat.title)
        .bind(format_datetime(&chat.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(())
    }

    async fn insert_note(&self, note: &Note) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO notes (id, chat_id, source, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(note.id.to_string())
        .bind(note.chat_id.to_string())
        .bind(note.source.to_string())
        .bind(&note.content)
        .bind(format_datetime(&note.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_note(&self, chat_id: &Uuid) -> Result<Option<Note>, StorageError> {
        let row = sqlx::query("SELECT * FROM notes WHERE chat_id = ? LIMIT 1")
            .bind(chat_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let note_row =
                    NoteRow::from_row(&row).map_err(|e| StorageError::Query(e.to_string()))?;
                Ok(Some(note_row.into_note()?))
            }
            None => Ok(None),
        }
    }

    async fn insert_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO messages (id, chat_id, role, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.chat_id.to_string())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_messages(&self, chat_id: &Uuid) -> Result<Vec<ChatMessage>, StorageError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE chat_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(chat_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| StorageError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn list_chats(&self, session_id: &Uuid) -> Result<Vec<Chat>, StorageError> {
        let rows = sqlx::query(
            "SELECT * FROM chats WHERE session_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(session_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        let mut chats = Vec::with_capacity(rows.len());
        for row in &rows {
            let chat_row =
                ChatRow::from_row(row).map_err(|e| StorageError::Query(e.to_string()))?;
            chats.push(chat_row.into_chat()?);
        }

        Ok(chats)
    }

    async fn find_chat(
        &self,
        session_id: &Uuid,
        chat_id: &Uuid,
    ) -> Result<Option<Chat>, StorageError> {
        let row = sqlx::query("SELECT * FROM chats WHERE session_id = ? AND id = ?")
            .bind(session_id.to_string())
            .bind(chat_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let chat_row =
                    ChatRow::from_row(&row).map_err(|e| StorageError::Query(e.to_string()))?;
                Ok(Some(chat_row.into_chat()?))
            }
            None => Ok(None),
        }
    }
}
