//! Shared domain types for Repaso.
//!
//! This crate contains the core domain types used across the Repaso backend:
//! sessions, chats, notes, messages, model turns, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod session;
