//! Global configuration types for Repaso.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! serde default so a partial or missing file still yields a usable config.

use serde::{Deserialize, Serialize};

/// Top-level configuration loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub model: ModelConfig,
}

/// Model gateway configuration (`[model]` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier passed on every completion request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Deadline for a single completion request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default() {
        let config = GlobalConfig::default();
        assert_eq!(config.model.base_url, "http://localhost:11434");
        assert_eq!(config.model.model, "llama3");
        assert_eq!(config.model.request_timeout_secs, 120);
    }

    #[test]
    fn test_partial_model_config_fills_defaults() {
        let json = r#"{"model":{"model":"llama3.1"}}"#;
        let config: GlobalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.model.model, "llama3.1");
        assert_eq!(config.model.base_url, "http://localhost:11434");
    }
}
