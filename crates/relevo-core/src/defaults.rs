//! Default values for engine configuration.
//!
//! Every tunable consumed by [`crate::config::SearchConfig`] has a named
//! constant here so callers and tests share a single source of truth.

/// Maximum accepted query length in characters; longer queries are truncated.
pub const MAX_QUERY_LENGTH: usize = 500;

/// Upper bound for `page_size` on any search request.
pub const MAX_PAGE_SIZE: usize = 50;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of suggestions produced when the caller does not specify a limit.
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// Trailing window (hours) for popularity-based suggestions.
pub const POPULAR_WINDOW_HOURS: i64 = 24;

/// Timeout (seconds) applied to every AI completion call. Timeout is treated
/// the same as provider-unavailable: fall back, never surface.
pub const AI_TIMEOUT_SECS: u64 = 10;

/// Language code returned when no script heuristic matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fixed capacity of the search history ring. Oldest entries evict first.
pub const HISTORY_CAPACITY: usize = 1000;

/// Number of characters sampled by the language detector.
pub const LANGUAGE_SAMPLE_CHARS: usize = 500;

/// Suggestion lines longer than this are discarded as unusable.
pub const MAX_SUGGESTION_CHARS: usize = 100;

/// View count above which the popularity multiplier applies.
pub const POPULARITY_VIEW_THRESHOLD: u64 = 100;

/// Days after which the recency score decays to zero.
pub const RECENCY_HORIZON_DAYS: f64 = 365.0;

/// Temperature for query-understanding completions (low, for determinism).
pub const UNDERSTANDING_TEMPERATURE: f32 = 0.3;

/// Max tokens requested from the completion backend for understanding.
pub const UNDERSTANDING_MAX_TOKENS: u32 = 512;

/// Max tokens requested from the completion backend for suggestions.
pub const SUGGESTION_MAX_TOKENS: u32 = 256;

// =============================================================================
// SCORING WEIGHT DEFAULTS
// =============================================================================

/// Weight of the title match score.
pub const TITLE_WEIGHT: f64 = 0.4;

/// Weight of the snippet/content match score.
pub const CONTENT_WEIGHT: f64 = 0.3;

/// Weight of the tag overlap score.
pub const TAG_WEIGHT: f64 = 0.2;

/// Weight of the recency decay score.
pub const RECENCY_WEIGHT: f64 = 0.1;

/// Additive boost applied per matching term when the full phrase matches.
pub const EXACT_MATCH_BOOST: f64 = 0.2;

/// Multiplier applied to results above the view-count threshold.
pub const POPULARITY_BOOST: f64 = 1.2;
