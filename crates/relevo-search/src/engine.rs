//! Search orchestration.
//!
//! [`SearchEngine`] ties the pipeline together: validate → understand →
//! fetch candidates → filter → rank → threshold → paginate → suggest →
//! record history. AI enrichment failures are absorbed inside the adapter
//! and generator; content-source errors propagate unmodified.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, instrument};

use relevo_core::{
    CompletionBackend, ContentSource, Error, QueryUnderstanding, Result, SearchConfig,
    SearchHistoryEntry, SearchRequest, SearchResponse,
};

use crate::filter::{apply_filters, apply_relevance_threshold, paginate};
use crate::history::SearchHistory;
use crate::ranking::Ranker;
use crate::suggestions::SuggestionGenerator;
use crate::understanding::UnderstandingAdapter;

/// The engine entry point.
///
/// Request-scoped computation is pure and thread-safe; the history tracker is
/// the only shared mutable state and serializes internally, so one engine
/// value serves concurrent requests.
pub struct SearchEngine {
    source: Arc<dyn ContentSource>,
    history: Arc<SearchHistory>,
    understanding: UnderstandingAdapter,
    suggestions: SuggestionGenerator,
    ranker: Ranker,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with no AI backend; understanding and suggestions
    /// always take their deterministic paths.
    pub fn new(source: Arc<dyn ContentSource>, config: SearchConfig) -> Self {
        Self::build(source, None, config)
    }

    /// Create an engine enriched by a completion backend.
    pub fn with_backend(
        source: Arc<dyn ContentSource>,
        backend: Arc<dyn CompletionBackend>,
        config: SearchConfig,
    ) -> Self {
        Self::build(source, Some(backend), config)
    }

    fn build(
        source: Arc<dyn ContentSource>,
        backend: Option<Arc<dyn CompletionBackend>>,
        config: SearchConfig,
    ) -> Self {
        let history = Arc::new(SearchHistory::new());
        let understanding = match &backend {
            Some(backend) => UnderstandingAdapter::new(
                Arc::clone(backend),
                config.ai_timeout_secs,
                config.default_language.clone(),
            ),
            None => UnderstandingAdapter::heuristic_only(config.default_language.clone()),
        };
        let suggestions = SuggestionGenerator::new(
            backend,
            Arc::clone(&history),
            config.ai_timeout_secs,
            config.popular_window_hours,
        );
        let ranker = Ranker::new(config.weights);

        Self {
            source,
            history,
            understanding,
            suggestions,
            ranker,
            config,
        }
    }

    /// The shared search history, for popularity queries and inspection.
    pub fn history(&self) -> &Arc<SearchHistory> {
        &self.history
    }

    /// Execute a search request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disabled`] when search is switched off,
    /// [`Error::InvalidInput`] for a blank query, and propagates content
    /// source errors unmodified. AI enrichment never causes an error.
    #[instrument(skip(self, request), fields(component = "engine", op = "search"))]
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        if !self.config.enabled {
            return Err(Error::Disabled("search".to_string()));
        }

        let query: String = request
            .query
            .trim()
            .chars()
            .take(self.config.max_query_length)
            .collect();
        if query.is_empty() {
            return Err(Error::InvalidInput("query must not be blank".to_string()));
        }

        let page_size = request.page_size.clamp(1, self.config.max_page_size);

        let understanding = if self.config.enable_query_understanding {
            Some(self.understanding.understand(&query).await)
        } else {
            None
        };

        let candidates = self
            .source
            .fetch_candidates(&query, request.search_type)
            .await?;
        debug!(
            query = %query,
            candidate_count = candidates.len(),
            "Fetched candidates"
        );

        let filtered = apply_filters(candidates, &request);
        let ranked = self.ranker.rank(&query, &filtered);
        let kept = apply_relevance_threshold(ranked, request.min_relevance_score);
        let page = paginate(kept, request.page, page_size);

        let suggestions = if request.include_suggestions {
            self.suggestions
                .suggest(&query, self.config.default_suggestion_count)
                .await
        } else {
            Vec::new()
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        if self.config.enable_search_history {
            let language = understanding
                .as_ref()
                .map(|u| u.language.clone())
                .unwrap_or_else(|| self.config.default_language.clone());
            let mut entry = SearchHistoryEntry::new(query.clone(), request.search_type)
                .with_result_count(page.total_count)
                .with_processing_time_ms(processing_time_ms)
                .with_language(language);
            if let Some(user_id) = &request.user_id {
                entry = entry.with_user_id(user_id.clone());
            }
            self.history.record(entry);
        }

        info!(
            query = %query,
            result_count = page.total_count,
            page = page.page,
            duration_ms = processing_time_ms,
            "Search complete"
        );

        Ok(SearchResponse {
            results: page.results,
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            suggestions,
            query_understanding: understanding,
            processing_time_ms,
            timestamp: Utc::now(),
        })
    }

    /// Suggest completions for a partial query. Never fails; blank input
    /// yields an empty list.
    pub async fn suggestions(&self, partial_query: &str, limit: usize) -> Vec<String> {
        self.suggestions.suggest(partial_query, limit).await
    }

    /// Understand a query. Never fails; degrades to heuristic output.
    pub async fn understand(&self, query: &str) -> QueryUnderstanding {
        self.understanding.understand(query).await
    }
}
