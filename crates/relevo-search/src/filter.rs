//! Candidate filtering and pagination.
//!
//! Category, tag, and date filters run before ranking; the relevance
//! threshold and page slicing run after.

use relevo_core::{SearchRequest, SearchResult};

/// One page of results plus the pagination bookkeeping for the response.
#[derive(Debug, Clone)]
pub struct Page {
    pub results: Vec<SearchResult>,
    pub total_count: usize,
    /// Served page, clamped into `[1, max(total_pages, 1)]`.
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_count / page_size)`; 0 when there are no results.
    pub total_pages: usize,
}

/// Apply the pre-ranking filters from a request: exact category match, tag
/// intersection (any overlap, case-insensitive), and the created-at range.
pub fn apply_filters(candidates: Vec<SearchResult>, request: &SearchRequest) -> Vec<SearchResult> {
    let wanted_tags: Vec<String> = request.tags.iter().map(|t| t.to_lowercase()).collect();

    candidates
        .into_iter()
        .filter(|result| {
            if let Some(category) = &request.category {
                if result.category.as_deref() != Some(category.as_str()) {
                    return false;
                }
            }
            if !wanted_tags.is_empty() {
                let overlap = result
                    .tags
                    .iter()
                    .any(|tag| wanted_tags.contains(&tag.to_lowercase()));
                if !overlap {
                    return false;
                }
            }
            if let Some(start) = request.created_after {
                if result.created_at < start {
                    return false;
                }
            }
            if let Some(end) = request.created_before {
                if result.created_at > end {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Drop ranked results scoring below the request's threshold.
pub fn apply_relevance_threshold(
    results: Vec<SearchResult>,
    min_relevance_score: f64,
) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| r.relevance_score >= min_relevance_score)
        .collect()
}

/// Slice ranked, thresholded results into the requested page.
///
/// The requested page clamps into the valid range, so over-paging serves the
/// last page rather than an empty one.
pub fn paginate(results: Vec<SearchResult>, requested_page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_count = results.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let results: Vec<SearchResult> = results
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        results,
        total_count,
        page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use relevo_core::{ContentType, SearchRequest};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn result(category: Option<&str>, tags: &[&str], age_days: i64) -> SearchResult {
        SearchResult {
            id: Uuid::new_v4(),
            content_type: ContentType::Post,
            title: "t".to_string(),
            snippet: "s".to_string(),
            url: "/x".to_string(),
            author: "a".to_string(),
            created_at: Utc::now() - Duration::days(age_days),
            category: category.map(|c| c.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            view_count: None,
            relevance_score: 0.0,
            metadata: HashMap::new(),
        }
    }

    fn results_with_scores(scores: &[f64]) -> Vec<SearchResult> {
        scores
            .iter()
            .map(|&score| {
                let mut r = result(None, &[], 0);
                r.relevance_score = score;
                r
            })
            .collect()
    }

    #[test]
    fn test_category_filter_exact_match() {
        let candidates = vec![
            result(Some("devops"), &[], 0),
            result(Some("Devops"), &[], 0),
            result(None, &[], 0),
        ];
        let req = SearchRequest::new("q").with_category("devops");
        let filtered = apply_filters(candidates, &req);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category.as_deref(), Some("devops"));
    }

    #[test]
    fn test_tag_filter_any_overlap() {
        let candidates = vec![
            result(None, &["rust", "webdev"], 0),
            result(None, &["python"], 0),
            result(None, &[], 0),
        ];
        let req =
            SearchRequest::new("q").with_tags(vec!["RUST".to_string(), "golang".to_string()]);
        let filtered = apply_filters(candidates, &req);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].tags[0], "rust");
    }

    #[test]
    fn test_date_range_filter() {
        let candidates = vec![
            result(None, &[], 0),   // today
            result(None, &[], 10),  // inside range
            result(None, &[], 100), // too old
        ];
        let now = Utc::now();
        let req = SearchRequest::new("q")
            .created_after(now - Duration::days(30))
            .created_before(now - Duration::days(5));
        let filtered = apply_filters(candidates, &req);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_date_filter_excludes_regardless_of_score() {
        let mut old = result(None, &[], 400);
        old.relevance_score = 1.0;
        let req = SearchRequest::new("q").created_after(Utc::now() - Duration::days(30));
        let filtered = apply_filters(vec![old], &req);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_filters_passes_everything() {
        let candidates = vec![result(None, &[], 0), result(Some("x"), &["y"], 50)];
        let req = SearchRequest::new("q");
        assert_eq!(apply_filters(candidates, &req).len(), 2);
    }

    #[test]
    fn test_relevance_threshold() {
        let results = results_with_scores(&[0.9, 0.5, 0.3]);
        let kept = apply_relevance_threshold(results, 0.5);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.relevance_score >= 0.5));
    }

    #[test]
    fn test_paginate_23_items_page_size_20() {
        let results = results_with_scores(&[0.5; 23]);
        let page = paginate(results, 1, 20);
        assert_eq!(page.total_count, 23);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.results.len(), 20);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_paginate_over_paging_clamps_to_last_page() {
        let results = results_with_scores(&[0.5; 23]);
        let page = paginate(results, 5, 20);
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 3);
    }

    #[test]
    fn test_paginate_empty_results() {
        let page = paginate(Vec::new(), 3, 10);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_paginate_page_zero_clamps_to_one() {
        let results = results_with_scores(&[0.5; 5]);
        let page = paginate(results, 0, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 5);
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let results = results_with_scores(&[0.5; 40]);
        let page = paginate(results, 2, 20);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.results.len(), 20);
    }
}
