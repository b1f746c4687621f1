//! AI-assisted query understanding with deterministic fallback.
//!
//! The adapter returns a concrete [`QueryUnderstanding`] from every call.
//! Fallback is ordinary control flow, not error handling: a structured parse
//! of the provider response is attempted first, anything short of that falls
//! to the heuristic tier, and the heuristic tier cannot fail.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use relevo_core::{defaults, CompletionBackend, CompletionRequest, QueryUnderstanding};

use crate::language::{detect_language_with_default, extract_basic_entities};

/// Wraps an optional completion backend behind the understanding contract:
/// never fails, never returns an empty understanding.
pub struct UnderstandingAdapter {
    backend: Option<Arc<dyn CompletionBackend>>,
    timeout: Duration,
    default_language: String,
}

/// Permissive shape for the provider's JSON reply. Every field is optional;
/// missing fields default to the heuristic equivalents.
#[derive(Debug, Deserialize)]
struct RawUnderstanding {
    #[serde(default)]
    expanded_query: Option<String>,
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    entities: Option<Vec<String>>,
    #[serde(default)]
    suggested_correction: Option<String>,
}

impl UnderstandingAdapter {
    /// Create an adapter with no AI backend; every call takes the heuristic
    /// path.
    pub fn heuristic_only(default_language: impl Into<String>) -> Self {
        Self {
            backend: None,
            timeout: Duration::from_secs(defaults::AI_TIMEOUT_SECS),
            default_language: default_language.into(),
        }
    }

    /// Create an adapter backed by a completion provider.
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        timeout_secs: u64,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            backend: Some(backend),
            timeout: Duration::from_secs(timeout_secs),
            default_language: default_language.into(),
        }
    }

    /// Understand a query. Never fails; degrades to heuristic output.
    pub async fn understand(&self, query: &str) -> QueryUnderstanding {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return QueryUnderstanding {
                original_query: query.to_string(),
                expanded_query: String::new(),
                intent: "unknown".to_string(),
                entities: Vec::new(),
                language: self.default_language.clone(),
                suggested_correction: None,
            };
        }

        let language = detect_language_with_default(trimmed, &self.default_language);
        let basic = self.basic_understanding(trimmed, &language);

        let Some(backend) = &self.backend else {
            return basic;
        };

        let available = tokio::time::timeout(self.timeout, backend.is_available())
            .await
            .unwrap_or(false);
        if !available {
            debug!(query = trimmed, "Completion backend unavailable, using heuristic understanding");
            return basic;
        }

        let request = CompletionRequest::new(understanding_prompt(trimmed, &language))
            .with_system(
                "You analyze search queries. Reply with a single JSON object and nothing else.",
            )
            .with_max_tokens(defaults::UNDERSTANDING_MAX_TOKENS)
            .with_temperature(defaults::UNDERSTANDING_TEMPERATURE);

        // Single attempt; timeout and transport failure are equivalent
        let completion = match tokio::time::timeout(self.timeout, backend.complete(&request)).await
        {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => {
                warn!(query = trimmed, error = %e, "Understanding completion failed, falling back");
                return basic;
            }
            Err(_) => {
                warn!(query = trimmed, "Understanding completion timed out, falling back");
                return basic;
            }
        };

        match parse_understanding(&completion.text) {
            Some(raw) => merge_understanding(basic, raw),
            None => {
                warn!(
                    query = trimmed,
                    response_len = completion.text.len(),
                    "No JSON object in understanding response, falling back"
                );
                basic
            }
        }
    }

    /// The heuristic tier: expansion is the identity, intent is "search",
    /// entities come from the quoted/capitalized extractor.
    fn basic_understanding(&self, query: &str, language: &str) -> QueryUnderstanding {
        QueryUnderstanding {
            original_query: query.to_string(),
            expanded_query: query.to_string(),
            intent: "search".to_string(),
            entities: extract_basic_entities(query),
            language: language.to_string(),
            suggested_correction: None,
        }
    }
}

/// Prompt asking for the four understanding fields as JSON.
fn understanding_prompt(query: &str, language: &str) -> String {
    format!(
        "Analyze this search query (language hint: {language}): \"{query}\"\n\
         Respond with a JSON object with these fields:\n\
         - \"expanded_query\": the query rewritten with helpful synonyms\n\
         - \"intent\": one of \"search\", \"question\", \"navigation\", \"troubleshooting\"\n\
         - \"entities\": notable names or phrases in the query\n\
         - \"suggested_correction\": a typo-corrected query, or null if none"
    )
}

/// Pull the first JSON object out of a possibly chatty response.
fn parse_understanding(text: &str) -> Option<RawUnderstanding> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Overlay provider fields onto the heuristic understanding. Blank provider
/// fields keep the heuristic value; corrections that merely echo the query
/// are dropped.
fn merge_understanding(basic: QueryUnderstanding, raw: RawUnderstanding) -> QueryUnderstanding {
    let expanded_query = raw
        .expanded_query
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(basic.expanded_query);
    let intent = raw
        .intent
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(basic.intent);
    let entities = match raw.entities {
        Some(entities) if !entities.is_empty() => dedup_ordered(entities),
        _ => basic.entities,
    };
    let suggested_correction = raw
        .suggested_correction
        .filter(|s| !s.trim().is_empty() && s.trim() != basic.original_query);

    QueryUnderstanding {
        original_query: basic.original_query,
        expanded_query,
        intent,
        entities,
        language: basic.language,
        suggested_correction,
    }
}

fn dedup_ordered(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
