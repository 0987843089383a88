//! Axum router configuration with middleware.
//!
//! Routes live at the root (no version prefix), matching the surface the
//! frontend calls. Middleware: CORS (allow any, the service is meant for a
//! local browser), request tracing, and a raised body limit for PDF uploads.
//!
//! The static frontend is served from `web/` (configurable via
//! `REPASO_WEB_DIR`). API routes take priority; unknown paths fall through
//! to the page's `index.html`. If the directory does not exist, only the
//! API is served.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Maximum upload size: PDFs over this are rejected outright.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Ingestion
        .route("/subir-apunte", post(handlers::ingest::upload_note))
        .route("/subir-texto", post(handlers::ingest::upload_text))
        // Conversation
        .route("/chat", post(handlers::chat::send_message))
        // Directory
        .route("/chats", get(handlers::directory::list_chats))
        .route("/select-chat", post(handlers::directory::select_chat))
        .route("/reset", post(handlers::directory::reset))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the static frontend from disk if the directory exists.
    let web_dir = std::env::var("REPASO_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "Static frontend serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
