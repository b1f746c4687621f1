//! Data model for search requests, results, and query understanding.
//!
//! Results carry a mutable `relevance_score` that is recomputed per query by
//! the ranker; it is not part of a result's identity (`id` is).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;

// =============================================================================
// CONTENT TYPES
// =============================================================================

/// Kind of content item a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Post,
    Question,
    Document,
    Faq,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Question => write!(f, "question"),
            Self::Document => write!(f, "document"),
            Self::Faq => write!(f, "faq"),
        }
    }
}

/// Content-type filter carried by a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Match every content type.
    #[default]
    All,
    Post,
    Question,
    Document,
    Faq,
}

impl SearchType {
    /// Whether a result of the given content type passes this filter.
    pub fn accepts(&self, content_type: ContentType) -> bool {
        match self {
            Self::All => true,
            Self::Post => content_type == ContentType::Post,
            Self::Question => content_type == ContentType::Question,
            Self::Document => content_type == ContentType::Document,
            Self::Faq => content_type == ContentType::Faq,
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Post => write!(f, "post"),
            Self::Question => write!(f, "question"),
            Self::Document => write!(f, "document"),
            Self::Faq => write!(f, "faq"),
        }
    }
}

// =============================================================================
// SEARCH REQUEST
// =============================================================================

/// A search request as accepted by the engine entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query. Trimmed and length-truncated by the engine.
    pub query: String,

    /// Content-type filter.
    #[serde(default)]
    pub search_type: SearchType,

    /// Exact category filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Tag filter; any overlap qualifies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Only results created at or after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,

    /// Only results created at or before this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,

    /// Results scoring below this threshold are dropped after ranking.
    #[serde(default)]
    pub min_relevance_score: f64,

    /// 1-based page number. Clamped into the valid range by the paginator.
    #[serde(default = "default_page")]
    pub page: usize,

    /// Page size. Clamped into `[1, MAX_PAGE_SIZE]` by the engine.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether to generate query suggestions alongside results.
    #[serde(default = "default_true")]
    pub include_suggestions: bool,

    /// Caller identity recorded in search history, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Caller-supplied language hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    defaults::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl SearchRequest {
    /// Create a request for the given query with default settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_type: SearchType::All,
            category: None,
            tags: Vec::new(),
            created_after: None,
            created_before: None,
            min_relevance_score: 0.0,
            page: 1,
            page_size: defaults::DEFAULT_PAGE_SIZE,
            include_suggestions: true,
            user_id: None,
            language: None,
        }
    }

    /// Restrict to a single content type.
    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Require an exact category match.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require tag overlap with the given tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Restrict to results created at or after the given instant.
    pub fn created_after(mut self, start: DateTime<Utc>) -> Self {
        self.created_after = Some(start);
        self
    }

    /// Restrict to results created at or before the given instant.
    pub fn created_before(mut self, end: DateTime<Utc>) -> Self {
        self.created_before = Some(end);
        self
    }

    /// Set the minimum relevance threshold.
    pub fn with_min_relevance(mut self, threshold: f64) -> Self {
        self.min_relevance_score = threshold;
        self
    }

    /// Set the requested page (1-based).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable suggestion generation for this request.
    pub fn with_suggestions(mut self, include: bool) -> Self {
        self.include_suggestions = include;
        self
    }

    /// Attach the caller's user id for history tracking.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

// =============================================================================
// SEARCH RESULT
// =============================================================================

/// A single content item, scored per query by the ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique per content item.
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    /// Recomputed per query; not part of identity.
    #[serde(default)]
    pub relevance_score: f64,
    /// Opaque per-item key/value data.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

// =============================================================================
// QUERY UNDERSTANDING
// =============================================================================

/// Structured interpretation of a raw query.
///
/// Always fully populated: understanding never fails outward, it degrades to
/// heuristic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryUnderstanding {
    pub original_query: String,
    pub expanded_query: String,
    /// Free-form classification, e.g. "search", "question", "navigation".
    pub intent: String,
    /// Ordered, deduplicated.
    pub entities: Vec<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_correction: Option<String>,
}

// =============================================================================
// SEARCH HISTORY
// =============================================================================

/// One executed search, recorded once and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub raw_query: String,
    /// Lowercased, trimmed; the grouping key for popularity.
    pub normalized_query: String,
    pub search_type: SearchType,
    pub result_count: usize,
    pub processing_time_ms: u64,
    pub searched_at: DateTime<Utc>,
    pub language: String,
}

impl SearchHistoryEntry {
    /// Create an entry for the given raw query, stamped with the current time.
    pub fn new(raw_query: impl Into<String>, search_type: SearchType) -> Self {
        let raw_query = raw_query.into();
        let normalized_query = normalize_query(&raw_query);
        Self {
            user_id: None,
            raw_query,
            normalized_query,
            search_type,
            result_count: 0,
            processing_time_ms: 0,
            searched_at: Utc::now(),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Attach the caller's user id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Record how many results the search produced.
    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    /// Record the elapsed processing time.
    pub fn with_processing_time_ms(mut self, ms: u64) -> Self {
        self.processing_time_ms = ms;
        self
    }

    /// Record the detected language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Lowercase and trim a query for use as a popularity grouping key.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// =============================================================================
// SEARCH RESPONSE
// =============================================================================

/// Composed response for one search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The requested page of ranked results.
    pub results: Vec<SearchResult>,
    /// Results passing filters and the relevance threshold, across all pages.
    pub total_count: usize,
    /// The served page, clamped into `[1, max(total_pages, 1)]`.
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_count / page_size)`; 0 when no results.
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_understanding: Option<QueryUnderstanding>,
    pub processing_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// SCORING WEIGHTS
// =============================================================================

/// Configurable weights for the multi-factor ranker.
///
/// Weights are non-negative floats and are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title_weight: f64,
    pub content_weight: f64,
    pub tag_weight: f64,
    pub recency_weight: f64,
    /// Added once per matching term when the full phrase also matches.
    pub exact_match_boost: f64,
    /// Multiplier for results above the view-count threshold.
    pub popularity_boost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_weight: defaults::TITLE_WEIGHT,
            content_weight: defaults::CONTENT_WEIGHT,
            tag_weight: defaults::TAG_WEIGHT,
            recency_weight: defaults::RECENCY_WEIGHT,
            exact_match_boost: defaults::EXACT_MATCH_BOOST,
            popularity_boost: defaults::POPULARITY_BOOST,
        }
    }
}
