//! Model gateway implementations.

pub mod ollama;
