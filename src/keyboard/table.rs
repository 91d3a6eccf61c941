//! Frequency tables

use crate::utils::sorted_by_count;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence counts keyed by keystroke symbol or digraph.
///
/// Counts only ever grow for the lifetime of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

/// One row of a sorted table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub count: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`
    pub fn increment(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
        }
    }

    /// Count for `key`, zero when never seen
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries by descending count, ties by ascending key
    pub fn sorted(&self) -> Vec<TableEntry> {
        sorted_by_count(self.iter())
            .into_iter()
            .map(|(key, count)| TableEntry {
                key: key.to_string(),
                count,
            })
            .collect()
    }

    /// The `n` most frequent entries
    pub fn top(&self, n: usize) -> Vec<TableEntry> {
        let mut entries = self.sorted();
        entries.truncate(n);
        entries
    }

    /// Read-only view of the underlying map
    pub fn as_map(&self) -> &HashMap<String, u64> {
        &self.counts
    }
}
