//! Business logic and gateway trait definitions for Repaso.
//!
//! This crate defines the "ports" (the storage repository trait and the
//! model gateway trait) that the infrastructure layer implements. It depends
//! only on `repaso-types` -- never on `repaso-infra` or any database/IO crate.

pub mod chat;
pub mod ingest;
pub mod llm;
