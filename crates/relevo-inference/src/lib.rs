//! # relevo-inference
//!
//! AI completion backend abstraction for relevo.
//!
//! This crate provides:
//! - An Ollama-compatible HTTP backend (default, feature `ollama`)
//! - A mock backend for deterministic tests (feature `mock`)
//!
//! The engine consumes backends through the [`relevo_core::CompletionBackend`]
//! trait and never depends on a concrete implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use relevo_core::{CompletionBackend, CompletionRequest};
//! use relevo_inference::OllamaBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OllamaBackend::from_env();
//!     if backend.is_available().await {
//!         let completion = backend
//!             .complete(&CompletionRequest::new("Suggest 5 related queries"))
//!             .await
//!             .unwrap();
//!         println!("{}", completion.text);
//!     }
//! }
//! ```

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types so dependents need only this crate for backend work
pub use relevo_core::{Completion, CompletionBackend, CompletionRequest};

#[cfg(feature = "ollama")]
pub use ollama::OllamaBackend;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionBackend;
