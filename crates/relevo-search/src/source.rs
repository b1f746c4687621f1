//! In-memory content source.
//!
//! Backs tests and demos; production deployments implement
//! [`ContentSource`] over a search index or repository instead.

use async_trait::async_trait;

use relevo_core::{ContentSource, Result, SearchResult, SearchType};

/// Content source over a fixed in-memory collection.
///
/// Candidate selection is by content type only; relevance is the ranker's
/// job, so every type-matching item is a candidate.
pub struct InMemorySource {
    items: Vec<SearchResult>,
}

impl InMemorySource {
    /// Create a source over the given items.
    pub fn new(items: Vec<SearchResult>) -> Self {
        Self { items }
    }

    /// Create an empty source.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ContentSource for InMemorySource {
    async fn fetch_candidates(
        &self,
        _query: &str,
        filter: SearchType,
    ) -> Result<Vec<SearchResult>> {
        Ok(self
            .items
            .iter()
            .filter(|item| filter.accepts(item.content_type))
            .cloned()
            .collect())
    }
}
