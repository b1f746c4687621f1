//! Engine configuration.

use crate::defaults;
use crate::models::ScoringWeights;

/// Configuration consumed by the search engine.
///
/// Constructed with [`Default`], builder-style setters, or [`SearchConfig::from_env`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Master feature flag; when false, `search` rejects every request.
    pub enabled: bool,
    /// Queries longer than this (in characters) are truncated.
    pub max_query_length: usize,
    /// Upper bound for any request's page size.
    pub max_page_size: usize,
    /// Page size when a request does not specify one.
    pub default_page_size: usize,
    /// Suggestion count when a caller does not specify a limit.
    pub default_suggestion_count: usize,
    /// Run the AI query-understanding step.
    pub enable_query_understanding: bool,
    /// Record executed searches in the history tracker.
    pub enable_search_history: bool,
    /// Trailing window for popularity-based suggestions.
    pub popular_window_hours: i64,
    /// Timeout applied to every completion call; timeout means fallback.
    pub ai_timeout_secs: u64,
    /// Language code used when detection finds nothing.
    pub default_language: String,
    /// Ranker weights.
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_query_length: defaults::MAX_QUERY_LENGTH,
            max_page_size: defaults::MAX_PAGE_SIZE,
            default_page_size: defaults::DEFAULT_PAGE_SIZE,
            default_suggestion_count: defaults::DEFAULT_SUGGESTION_COUNT,
            enable_query_understanding: true,
            enable_search_history: true,
            popular_window_hours: defaults::POPULAR_WINDOW_HOURS,
            ai_timeout_secs: defaults::AI_TIMEOUT_SECS,
            default_language: defaults::DEFAULT_LANGUAGE.to_string(),
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Build a configuration from `RELEVO_*` environment variables, falling
    /// back to defaults for anything unset or unparsable. Loads `.env` if
    /// one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(v) = env_parse::<bool>("RELEVO_SEARCH_ENABLED") {
            config.enabled = v;
        }
        if let Some(v) = env_parse::<usize>("RELEVO_MAX_QUERY_LENGTH") {
            config.max_query_length = v;
        }
        if let Some(v) = env_parse::<usize>("RELEVO_MAX_PAGE_SIZE") {
            config.max_page_size = v.max(1);
        }
        if let Some(v) = env_parse::<bool>("RELEVO_QUERY_UNDERSTANDING") {
            config.enable_query_understanding = v;
        }
        if let Some(v) = env_parse::<bool>("RELEVO_SEARCH_HISTORY") {
            config.enable_search_history = v;
        }
        if let Some(v) = env_parse::<i64>("RELEVO_POPULAR_WINDOW_HOURS") {
            config.popular_window_hours = v;
        }
        if let Some(v) = env_parse::<u64>("RELEVO_AI_TIMEOUT_SECS") {
            config.ai_timeout_secs = v;
        }

        config
    }

    /// Disable the search feature entirely.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Enable or disable the AI query-understanding step.
    pub fn with_query_understanding(mut self, enable: bool) -> Self {
        self.enable_query_understanding = enable;
        self
    }

    /// Enable or disable history recording.
    pub fn with_search_history(mut self, enable: bool) -> Self {
        self.enable_search_history = enable;
        self
    }

    /// Override the ranker weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Override the completion-call timeout.
    pub fn with_ai_timeout_secs(mut self, secs: u64) -> Self {
        self.ai_timeout_secs = secs;
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
