//! Term-overlap relevance scoring for a single (query, content) pair.

use crate::tokenizer::tokenize;

/// Computes a [0, 1] relevance score from term overlap and exact-phrase
/// presence.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer {
    exact_match_boost: f64,
}

impl RelevanceScorer {
    /// Create a scorer with the given exact-match boost.
    pub fn new(exact_match_boost: f64) -> Self {
        Self { exact_match_boost }
    }

    /// Score `content` against `query`.
    ///
    /// Base score is the fraction of query terms present as substrings of the
    /// lowercased content. When the full lowercased query also appears as a
    /// substring, the boost is added once per matching term, so phrase
    /// presence amplifies every per-term hit. This couples the boost magnitude
    /// to term count; the behavior is pinned deliberately, do not "fix" it to
    /// a per-result boost.
    ///
    /// Blank query or content scores 0. The result never exceeds 1.0.
    pub fn score(&self, query: &str, content: &str) -> f64 {
        let query = query.trim();
        if query.is_empty() || content.trim().is_empty() {
            return 0.0;
        }

        let terms = tokenize(query);
        if terms.is_empty() {
            return 0.0;
        }

        let content_lower = content.to_lowercase();
        let phrase_present = content_lower.contains(&query.to_lowercase());

        let mut match_count = 0usize;
        let mut boost = 0.0;
        for term in &terms {
            if content_lower.contains(term.as_str()) {
                match_count += 1;
                if phrase_present {
                    boost += self.exact_match_boost;
                }
            }
        }

        let base = match_count as f64 / terms.len() as f64;
        (base + boost).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relevo_core::defaults;

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(defaults::EXACT_MATCH_BOOST)
    }

    #[test]
    fn test_blank_inputs_score_zero() {
        assert_eq!(scorer().score("", "some content"), 0.0);
        assert_eq!(scorer().score("query", ""), 0.0);
        assert_eq!(scorer().score("   ", "content"), 0.0);
        assert_eq!(scorer().score("query", "   "), 0.0);
    }

    #[test]
    fn test_query_with_only_short_terms_scores_zero() {
        // Every term tokenizes away
        assert_eq!(scorer().score("a of to", "a of to and more"), 0.0);
    }

    #[test]
    fn test_partial_term_overlap() {
        // 2 of 3 terms present, no full phrase
        let score = scorer().score("docker kubernetes helm", "docker and kubernetes basics");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        assert_eq!(scorer().score("docker", "gardening tips for spring"), 0.0);
    }

    #[test]
    fn test_exact_phrase_saturates_to_one() {
        // Phrase presence implies every term matches, so base is 1.0 and the
        // per-term boost saturates at the cap
        let score = scorer().score("rust async", "a rust async walkthrough");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_boost_accumulates_per_matching_term() {
        // Pin the documented formula: with phrase present, every matching term
        // contributes one boost. base 1.0 + 3 * 0.2 caps at 1.0, and the same
        // phrase with a single term caps identically.
        let multi = scorer().score("machine learning basics", "machine learning basics guide");
        let single = scorer().score("machine", "machine learning basics guide");
        assert_eq!(multi, 1.0);
        assert_eq!(single, 1.0);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let score = scorer().score("Docker", "DOCKER deployment guide");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_substring_term_matching() {
        // "rust" matches inside "trusted": the scorer is a substring
        // heuristic, not a word matcher
        let score = scorer().score("rust", "a trusted source");
        assert!(score > 0.0);
    }

    #[test]
    fn test_score_range_property() {
        let cases = [
            ("rust async await", "rust async await tutorial"),
            ("one two three four five", "two four"),
            ("xyz", "abc"),
            ("a longer query with many terms here", "terms here"),
        ];
        for (q, c) in cases {
            let score = scorer().score(q, c);
            assert!((0.0..=1.0).contains(&score), "score {} for ({q}, {c})", score);
        }
    }
}
