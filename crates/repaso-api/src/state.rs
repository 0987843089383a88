//! Application state wiring all services together.
//!
//! AppState holds the concrete service instance used by the API handlers.
//! The service is generic over the repository/gateway traits, but AppState
//! pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use repaso_core::chat::service::QuizService;
use repaso_infra::config::{load_global_config, resolve_data_dir};
use repaso_infra::llm::ollama::OllamaGateway;
use repaso_infra::sqlite::chat::SqliteChatRepository;
use repaso_infra::sqlite::pool::DatabasePool;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteQuizService = QuizService<SqliteChatRepository, OllamaGateway>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<ConcreteQuizService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the DB, load config,
    /// wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("repaso.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        // Model gateway from config.toml (defaults: local Ollama, llama3)
        let config = load_global_config(&data_dir).await;
        let gateway = OllamaGateway::new(&config.model)?;
        tracing::info!(
            base_url = %config.model.base_url,
            model = %config.model.model,
            "Model gateway configured"
        );

        let repo = SqliteChatRepository::new(db_pool.clone());
        let quiz_service = QuizService::new(repo, gateway);

        Ok(Self {
            quiz_service: Arc::new(quiz_service),
            data_dir,
            db_pool,
        })
    }
}
