//! HTTP/REST API layer for Repaso.
//!
//! Axum-based JSON API with per-session identity (X-Session-Token header),
//! flat `{"error": ...}` failure bodies, and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
