//! Wire types for the Ollama chat API.
//!
//! Request/response shapes for `POST /api/chat` in non-streaming mode.
//! Only the fields this gateway reads are modeled; unknown response fields
//! are ignored by serde.

use serde::{Deserialize, Serialize};

use repaso_types::llm::Turn;

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
}

impl OllamaChatRequest {
    /// Build a non-streaming request from a generic turn sequence.
    pub fn from_turns(model: &str, turns: &[Turn]) -> Self {
        Self {
            model: model.to_string(),
            messages: turns
                .iter()
                .map(|t| OllamaMessage {
                    role: t.role.to_string(),
                    content: t.content.clone(),
                })
                .collect(),
            stream: false,
        }
    }
}

/// One message on the Ollama wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a non-streaming `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct OllamaChatResponse {
    /// Absent when the model produced no message.
    pub message: Option<OllamaMessage>,
    #[serde(default)]
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use repaso_types::llm::MessageRole;

    #[test]
    fn test_request_serialization() {
        let turns = vec![
            Turn::system("contexto"),
            Turn::user("hola"),
        ];
        let request = OllamaChatRequest::from_turns("llama3", &turns);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama3");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hola");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "model": "llama3",
            "created_at": "2024-05-01T00:00:00Z",
            "message": {"role": "assistant", "content": "¿Qué es un átomo?"},
            "done": true,
            "total_duration": 1
        }"#;
        let resp: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.done);
        let message = resp.message.unwrap();
        assert_eq!(message.role, MessageRole::Assistant.to_string());
        assert_eq!(message.content, "¿Qué es un átomo?");
    }

    #[test]
    fn test_response_without_message() {
        let json = r#"{"done": true}"#;
        let resp: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.message.is_none());
    }
}
