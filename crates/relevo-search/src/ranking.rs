//! Multi-factor result ranking.
//!
//! The ranker combines title, content, tag, and recency scores under
//! configurable weights, applies a popularity multiplier, and sorts
//! descending. It is a pure transformation: candidates are cloned and
//! rescored, never mutated in place, so ranking is idempotent and safely
//! repeatable.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use relevo_core::{defaults, ScoringWeights, SearchResult};

use crate::scoring::RelevanceScorer;
use crate::tokenizer::tokenize;

/// Ranks candidate results for a query.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    scorer: RelevanceScorer,
}

impl Ranker {
    /// Create a ranker with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            scorer: RelevanceScorer::new(weights.exact_match_boost),
        }
    }

    /// Rank candidates for `query`, scored as of now.
    pub fn rank(&self, query: &str, candidates: &[SearchResult]) -> Vec<SearchResult> {
        self.rank_at(query, candidates, Utc::now())
    }

    /// Rank candidates with an explicit reference instant for recency decay.
    pub fn rank_at(
        &self,
        query: &str,
        candidates: &[SearchResult],
        now: DateTime<Utc>,
    ) -> Vec<SearchResult> {
        let terms: HashSet<String> = tokenize(query).into_iter().collect();

        let mut ranked: Vec<SearchResult> = candidates
            .iter()
            .map(|candidate| {
                let mut scored = candidate.clone();
                scored.relevance_score = self.score_result(query, &terms, candidate, now);
                scored
            })
            .collect();

        // Stable sort: ties retain candidate input order
        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    fn score_result(
        &self,
        query: &str,
        terms: &HashSet<String>,
        result: &SearchResult,
        now: DateTime<Utc>,
    ) -> f64 {
        let title_score = self.scorer.score(query, &result.title);
        let content_score = self.scorer.score(query, &result.snippet);
        let tag_score = tag_score(terms, &result.tags);
        let recency = recency_score(result.created_at, now);

        let popularity_multiplier = match result.view_count {
            Some(views) if views > defaults::POPULARITY_VIEW_THRESHOLD => {
                self.weights.popularity_boost
            }
            _ => 1.0,
        };

        let base = title_score * self.weights.title_weight
            + content_score * self.weights.content_weight
            + tag_score * self.weights.tag_weight
            + recency * self.weights.recency_weight;

        (base * popularity_multiplier).min(1.0)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Fraction of a result's tags whose lowercase form is among the query terms.
/// 0 when the result has no tags.
fn tag_score(terms: &HashSet<String>, tags: &[String]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let matching = tags
        .iter()
        .filter(|tag| terms.contains(&tag.to_lowercase()))
        .count();
    matching as f64 / tags.len() as f64
}

/// Linear recency decay: 1.0 for brand-new content, 0.0 at one year, clamped
/// into [0, 1] so future-dated content scores as fresh, never above.
pub fn recency_score(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - created_at).num_seconds() as f64 / 86_400.0;
    (1.0 - days / defaults::RECENCY_HORIZON_DAYS).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn result(title: &str, snippet: &str, tags: &[&str]) -> SearchResult {
        SearchResult {
            id: Uuid::new_v4(),
            content_type: relevo_core::ContentType::Post,
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: "/x".to_string(),
            author: "a".to_string(),
            created_at: Utc::now(),
            category: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            view_count: None,
            relevance_score: 0.0,
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn test_recency_score_fresh() {
        let now = Utc::now();
        assert_eq!(recency_score(now, now), 1.0);
    }

    #[test]
    fn test_recency_score_one_year_floor() {
        let now = Utc::now();
        assert_eq!(recency_score(now - Duration::days(365), now), 0.0);
        assert_eq!(recency_score(now - Duration::days(800), now), 0.0);
    }

    #[test]
    fn test_recency_score_future_clamps_to_one() {
        let now = Utc::now();
        assert_eq!(recency_score(now + Duration::days(30), now), 1.0);
    }

    #[test]
    fn test_recency_score_monotonic_non_increasing() {
        let now = Utc::now();
        let mut prev = f64::INFINITY;
        for days in [0, 1, 30, 90, 180, 364, 365, 400] {
            let score = recency_score(now - Duration::days(days), now);
            assert!(score <= prev, "recency increased at {} days", days);
            prev = score;
        }
    }

    #[test]
    fn test_rank_sorts_descending_within_bounds() {
        let ranker = Ranker::default();
        let candidates = vec![
            result("gardening", "flowers", &[]),
            result("rust tutorial", "learn rust today", &["rust"]),
            result("rust", "rust rust rust", &["rust", "tutorial"]),
        ];
        let ranked = ranker.rank("rust tutorial", &candidates);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        for r in &ranked {
            assert!((0.0..=1.0).contains(&r.relevance_score));
        }
        assert_eq!(ranked[0].title, "rust tutorial");
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let ranker = Ranker::default();
        let candidates = vec![result("rust", "rust", &[])];
        let _ranked = ranker.rank("rust", &candidates);
        assert_eq!(candidates[0].relevance_score, 0.0);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let ranker = Ranker::default();
        let candidates = vec![
            result("rust tutorial", "learn rust", &["rust"]),
            result("docker guide", "containers", &["docker"]),
        ];
        let once = ranker.rank_at("rust", &candidates, Utc::now());
        let twice = ranker.rank_at("rust", &once, Utc::now());
        assert_eq!(
            once.iter().map(|r| r.id).collect::<Vec<_>>(),
            twice.iter().map(|r| r.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ties_retain_input_order() {
        let ranker = Ranker::default();
        // Identical content scores identically; input order must survive
        let a = result("same title", "same snippet", &[]);
        let b = result("same title", "same snippet", &[]);
        let ids = (a.id, b.id);
        let ranked = ranker.rank("unrelated query", &[a, b]);
        assert_eq!(ranked[0].id, ids.0);
        assert_eq!(ranked[1].id, ids.1);
    }

    #[test]
    fn test_popularity_multiplier_above_threshold() {
        let ranker = Ranker::default();
        let mut popular = result("rust guide", "rust", &[]);
        popular.view_count = Some(5000);
        let mut quiet = popular.clone();
        quiet.id = Uuid::new_v4();
        quiet.view_count = Some(100); // at the threshold, not above

        let ranked = ranker.rank("rust", &[quiet.clone(), popular.clone()]);
        assert_eq!(ranked[0].id, popular.id);
        assert!(ranked[0].relevance_score > ranked[1].relevance_score);
    }

    #[test]
    fn test_tag_score_no_tags_is_zero() {
        let terms: HashSet<String> = tokenize("rust tutorial").into_iter().collect();
        assert_eq!(tag_score(&terms, &[]), 0.0);
    }

    #[test]
    fn test_tag_score_fraction() {
        let terms: HashSet<String> = tokenize("rust tutorial").into_iter().collect();
        let tags = vec!["Rust".to_string(), "webdev".to_string()];
        assert_eq!(tag_score(&terms, &tags), 0.5);
    }
}
