//! Minimal end-to-end run: seed an in-memory source, search, print the page.
//!
//! ```sh
//! cargo run -p relevo-search --example basic_search
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};

use relevo_core::{ContentType, SearchConfig, SearchRequest, SearchResult};
use relevo_search::{InMemorySource, SearchEngine};

fn seed(title: &str, snippet: &str, tags: &[&str], age_days: i64) -> SearchResult {
    SearchResult {
        id: uuid::Uuid::new_v4(),
        content_type: ContentType::Post,
        title: title.to_string(),
        snippet: snippet.to_string(),
        url: format!("/posts/{}", title.to_lowercase().replace(' ', "-")),
        author: "demo".to_string(),
        created_at: Utc::now() - Duration::days(age_days),
        category: Some("programming".to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        view_count: Some(42),
        relevance_score: 0.0,
        metadata: HashMap::new(),
    }
}

#[tokio::main]
async fn main() -> relevo_core::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let source = Arc::new(InMemorySource::new(vec![
        seed("Rust async patterns", "Working with tokio and futures", &["rust", "async"], 2),
        seed("Rust error handling", "Result, thiserror, and the ? operator", &["rust"], 40),
        seed("Docker basics", "Containers from first principles", &["docker"], 10),
    ]));
    let engine = SearchEngine::new(source, SearchConfig::from_env());

    let response = engine.search(SearchRequest::new("rust async")).await?;

    println!(
        "{} results ({} ms)",
        response.total_count, response.processing_time_ms
    );
    for result in &response.results {
        println!("  {:.3}  {}", result.relevance_score, result.title);
    }
    if !response.suggestions.is_empty() {
        println!("suggestions: {}", response.suggestions.join(", "));
    }

    Ok(())
}
