//! Query-completion suggestions.
//!
//! AI-backed when a provider is reachable, with two deterministic fallbacks:
//! templated completions when the provider fails outright, and
//! popularity-derived suggestions (then a fixed default list) when the
//! provider answers but yields nothing usable.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use relevo_core::{defaults, CompletionBackend, CompletionRequest};

use crate::history::SearchHistory;

/// Fallback suggestions when even the history is empty.
const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "getting started",
    "how to guide",
    "best practices",
    "common errors",
    "examples",
];

/// Produces up to `limit` suggestion strings for a partial query. Never fails.
pub struct SuggestionGenerator {
    backend: Option<Arc<dyn CompletionBackend>>,
    history: Arc<SearchHistory>,
    timeout: Duration,
    window_hours: i64,
}

impl SuggestionGenerator {
    /// Create a generator; pass `None` for a backend to always use fallbacks.
    pub fn new(
        backend: Option<Arc<dyn CompletionBackend>>,
        history: Arc<SearchHistory>,
        timeout_secs: u64,
        window_hours: i64,
    ) -> Self {
        Self {
            backend,
            history,
            timeout: Duration::from_secs(timeout_secs),
            window_hours,
        }
    }

    /// Suggest up to `limit` completed/related queries for `partial_query`.
    ///
    /// Blank input produces an empty list. Provider failure produces templated
    /// suggestions; a provider success with zero usable lines produces
    /// popularity suggestions (or the fixed defaults when history is empty).
    pub async fn suggest(&self, partial_query: &str, limit: usize) -> Vec<String> {
        let partial = partial_query.trim();
        if partial.is_empty() || limit == 0 {
            return Vec::new();
        }

        match self.ai_suggestions(partial, limit).await {
            None => templated_suggestions(partial, limit),
            Some(suggestions) if !suggestions.is_empty() => suggestions,
            Some(_) => {
                debug!(
                    partial = partial,
                    "AI produced no usable suggestions, using popularity fallback"
                );
                self.popularity_suggestions(limit)
            }
        }
    }

    /// One attempt against the provider. `None` means "provider path failed"
    /// (unavailable, timeout, transport error); `Some(vec![])` means the
    /// provider answered but nothing survived cleanup.
    async fn ai_suggestions(&self, partial: &str, limit: usize) -> Option<Vec<String>> {
        let backend = self.backend.as_ref()?;

        let available = tokio::time::timeout(self.timeout, backend.is_available())
            .await
            .unwrap_or(false);
        if !available {
            return None;
        }

        let request = CompletionRequest::new(format!(
            "Suggest {limit} related or completed search queries for: \"{partial}\"\n\
             One per line. No numbering, no bullets, no commentary."
        ))
        .with_max_tokens(defaults::SUGGESTION_MAX_TOKENS)
        .with_temperature(defaults::UNDERSTANDING_TEMPERATURE);

        match tokio::time::timeout(self.timeout, backend.complete(&request)).await {
            Ok(Ok(completion)) => Some(clean_suggestion_lines(&completion.text, limit)),
            Ok(Err(e)) => {
                warn!(partial = partial, error = %e, "Suggestion completion failed");
                None
            }
            Err(_) => {
                warn!(partial = partial, "Suggestion completion timed out");
                None
            }
        }
    }

    fn popularity_suggestions(&self, limit: usize) -> Vec<String> {
        let popular = self.history.popular_queries(self.window_hours, limit);
        if popular.is_empty() {
            DEFAULT_SUGGESTIONS
                .iter()
                .take(limit)
                .map(|s| s.to_string())
                .collect()
        } else {
            popular
        }
    }
}

/// Templated fallback: fixed completion patterns around the partial query.
fn templated_suggestions(partial: &str, limit: usize) -> Vec<String> {
    [
        format!("{partial} tutorial"),
        format!("{partial} guide"),
        format!("how to {partial}"),
        format!("{partial} examples"),
        format!("best {partial}"),
    ]
    .into_iter()
    .take(limit)
    .collect()
}

/// Split a provider reply into usable suggestion lines: strip bullets and
/// numbering, drop blank or over-length lines, deduplicate
/// case-insensitively, truncate to `limit`.
fn clean_suggestion_lines(text: &str, limit: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();

    for line in text.lines() {
        let cleaned = line
            .trim()
            .trim_start_matches(|c: char| {
                c.is_ascii_digit() || matches!(c, '-' | '*' | '•' | '.' | ')')
            })
            .trim();
        if cleaned.is_empty() || cleaned.chars().count() > defaults::MAX_SUGGESTION_CHARS {
            continue;
        }
        let key = cleaned.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        suggestions.push(cleaned.to_string());
        if suggestions.len() == limit {
            break;
        }
    }

    suggestions
}
