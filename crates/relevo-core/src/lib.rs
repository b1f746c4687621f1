//! # relevo-core
//!
//! Core types, traits, and configuration for the relevo search engine.
//!
//! This crate provides the data model shared by the engine and its
//! collaborators: search requests and responses, query understanding,
//! scoring weights, the error taxonomy, and the trait seams for content
//! retrieval and AI completion backends.

pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use models::*;
pub use traits::{Completion, CompletionBackend, CompletionRequest, ContentSource};
