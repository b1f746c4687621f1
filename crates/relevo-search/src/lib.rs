//! # relevo-search
//!
//! Query understanding and relevance ranking engine.
//!
//! This crate provides:
//! - Query tokenization and heuristic language/entity detection
//! - AI-assisted query understanding with deterministic fallback
//! - Multi-factor weighted relevance ranking with recency decay
//! - Filtering, thresholding, and pagination
//! - Query suggestions (AI, templated, and popularity-based)
//! - A bounded, thread-safe search history tracker
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use relevo_core::{SearchConfig, SearchRequest};
//! use relevo_search::{InMemorySource, SearchEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> relevo_core::Result<()> {
//! let source = Arc::new(InMemorySource::empty());
//! let engine = SearchEngine::new(source, SearchConfig::default());
//!
//! let response = engine.search(SearchRequest::new("rust async")).await?;
//! println!("{} results", response.total_count);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod filter;
pub mod history;
pub mod language;
pub mod ranking;
pub mod scoring;
pub mod source;
pub mod suggestions;
pub mod tokenizer;
pub mod understanding;

// Re-export core types
pub use relevo_core::*;

pub use engine::SearchEngine;
pub use filter::{apply_filters, apply_relevance_threshold, paginate, Page};
pub use history::SearchHistory;
pub use language::{detect_language, extract_basic_entities};
pub use ranking::{recency_score, Ranker};
pub use scoring::RelevanceScorer;
pub use source::InMemorySource;
pub use suggestions::SuggestionGenerator;
pub use tokenizer::tokenize;
pub use understanding::UnderstandingAdapter;
