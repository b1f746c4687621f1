//! Bounded, shared search history.
//!
//! An append-only-with-eviction log behind a single mutex. The backing
//! structure is never exposed; readers get snapshots, so iteration never
//! races a concurrent `record`.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use tracing::debug;

use relevo_core::{defaults, SearchHistoryEntry};

/// Thread-safe bounded log of executed searches.
///
/// Capacity is fixed at construction; appending beyond it evicts the oldest
/// entry (FIFO) in O(1).
pub struct SearchHistory {
    entries: Mutex<VecDeque<SearchHistoryEntry>>,
    capacity: usize,
}

impl SearchHistory {
    /// Create a history with the standard capacity.
    pub fn new() -> Self {
        Self::with_capacity(defaults::HISTORY_CAPACITY)
    }

    /// Create a history with an explicit capacity (min 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when over capacity.
    pub fn record(&self, entry: SearchHistoryEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Consistent copy of all retained entries, oldest first.
    pub fn snapshot(&self) -> Vec<SearchHistoryEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    /// The most frequent queries within the trailing window.
    ///
    /// Entries are grouped by normalized query and ordered by descending group
    /// size; each group is represented by its first-recorded raw query. Equal
    /// group sizes order by first appearance.
    pub fn popular_queries(&self, window_hours: i64, limit: usize) -> Vec<String> {
        let cutoff = Utc::now() - Duration::hours(window_hours);
        let snapshot = self.snapshot();

        let mut groups: HashMap<&str, (usize, usize, &str)> = HashMap::new();
        for (index, entry) in snapshot.iter().enumerate() {
            if entry.searched_at < cutoff {
                continue;
            }
            groups
                .entry(entry.normalized_query.as_str())
                .and_modify(|(count, _, _)| *count += 1)
                .or_insert((1, index, entry.raw_query.as_str()));
        }

        let mut ordered: Vec<(usize, usize, &str)> = groups.into_values().collect();
        ordered.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let popular: Vec<String> = ordered
            .into_iter()
            .take(limit)
            .map(|(_, _, raw)| raw.to_string())
            .collect();

        debug!(
            window_hours,
            group_count = popular.len(),
            "Computed popular queries"
        );
        popular
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}
