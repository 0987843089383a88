//! ModelGateway trait definition.
//!
//! The single abstraction over the external completion service: given an
//! ordered turn sequence, produce the assistant's reply content. The concrete
//! implementation (Ollama over HTTP) lives in repaso-infra.

use repaso_types::llm::{ModelError, Turn};

/// Trait for the chat-completion backend.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). No streaming:
/// `complete` suspends the caller until the full reply is available, bounded
/// by the implementation's request deadline.
pub trait ModelGateway: Send + Sync {
    /// Human-readable gateway name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Generate a reply for the given conversation.
    ///
    /// Returns the assistant message content; an empty string when the
    /// service answered without content (callers decide how to surface that).
    fn complete(
        &self,
        turns: &[Turn],
    ) -> impl std::future::Future<Output = Result<String, ModelError>> + Send;
}
