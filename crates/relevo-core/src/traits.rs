//! Trait seams for the engine's external collaborators.
//!
//! The engine consumes two interfaces: a [`ContentSource`] that materializes
//! unscored candidate results, and a [`CompletionBackend`] that executes a
//! prompted completion. Both are object-safe so callers can inject test
//! doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{SearchResult, SearchType};

// =============================================================================
// CONTENT SOURCE
// =============================================================================

/// Supplier of raw candidate results for a query.
///
/// Candidates arrive unscored (`relevance_score` is meaningless until the
/// ranker runs). Errors from a content source propagate to the caller
/// unmodified; the engine does not re-wrap them.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch candidate results for a query, restricted to the given filter.
    async fn fetch_candidates(
        &self,
        query: &str,
        filter: SearchType,
    ) -> Result<Vec<SearchResult>>;
}

// =============================================================================
// COMPLETION BACKEND
// =============================================================================

/// A single prompted completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    /// System context; empty string means none.
    pub system: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a request with no system context.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: String::new(),
            max_tokens: 512,
            temperature: 0.7,
        }
    }

    /// Set the system context.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Set the token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// A successful completion.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    /// Tokens consumed, when the backend reports it.
    pub tokens_used: Option<u32>,
}

/// Executor of prompted completions.
///
/// The engine treats unavailability and errors identically: fall back to the
/// deterministic heuristic path, never fail the outer request. A single
/// attempt is made per call; retries, if any, belong to the backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Whether the backend is reachable and ready to serve completions.
    async fn is_available(&self) -> bool;

    /// Execute one completion.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion>;

    /// The model this backend generates with.
    fn model_name(&self) -> &str;
}
