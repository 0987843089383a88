//! Chat domain: storage repository trait, prompt assembly, and the
//! quiz orchestration service.

pub mod prompt;
pub mod repository;
pub mod service;
