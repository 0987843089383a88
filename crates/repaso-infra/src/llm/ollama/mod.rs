//! OllamaGateway -- concrete [`ModelGateway`] implementation for a local
//! Ollama server.
//!
//! Sends non-streaming requests to the Ollama chat API (`/api/chat`). Every
//! request carries an explicit deadline (the client-level timeout), and a
//! transport failure (connect error or timeout) is retried exactly once
//! before surfacing [`ModelError::Exhausted`]. HTTP error statuses and
//! malformed payloads are not retried.

pub mod types;

use std::time::Duration;

use tracing::warn;

use repaso_core::llm::gateway::ModelGateway;
use repaso_types::config::ModelConfig;
use repaso_types::llm::{ModelError, Turn};

use self::types::{OllamaChatRequest, OllamaChatResponse};

/// Transport attempts per completion: the original call plus one retry.
const MAX_ATTEMPTS: u32 = 2;

/// Ollama chat-completion gateway.
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGateway {
    /// Create a new gateway from the model configuration.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ModelError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_once(&self, body: &OllamaChatRequest) -> Result<String, ModelError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(parsed.message.map(|m| m.content).unwrap_or_default())
    }
}

impl ModelGateway for OllamaGateway {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, turns: &[Turn]) -> Result<String, ModelError> {
        let body = OllamaChatRequest::from_turns(&self.model, turns);

        let mut last_transport_error = String::new();
        for attempt in 1..=MAX_ATTEMPTS {
            match self.send_once(&body).await {
                Ok(content) => return Ok(content),
                // Transient transport failure: retry once.
                Err(ModelError::Transport(message)) => {
                    warn!(attempt, error = %message, "Ollama transport failure");
                    last_transport_error = message;
                }
                // HTTP errors and bad payloads are surfaced as-is.
                Err(other) => return Err(other),
            }
        }

        warn!(error = %last_transport_error, "Ollama unreachable, giving up");
        Err(ModelError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
