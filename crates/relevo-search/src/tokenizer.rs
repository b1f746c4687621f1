//! Query tokenization.
//!
//! Pure, deterministic, no I/O. The tokenizer feeds both the relevance scorer
//! and the tag matcher, so its output order matters: terms keep their first
//! appearance order.

use std::collections::HashSet;

/// Split a query into ordered, deduplicated lowercase match terms.
///
/// Non-word characters become whitespace, the result splits on whitespace,
/// and terms of length <= 2 are discarded.
///
/// # Examples
///
/// ```
/// use relevo_search::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Rust, async/await!"), vec!["rust", "async", "await"]);
/// assert!(tokenize("a of to").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let cleaned: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|term| term.chars().count() > 2)
        .filter(|term| seen.insert(term.to_string()))
        .map(|term| term.to_string())
        .collect()
}
