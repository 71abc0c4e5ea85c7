use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A note surfaced for optional inclusion in one or more report sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedEntry {
    pub note_id: String,
    pub date: Option<NaiveDateTime>,
    pub text: String,
    pub snippet: String,
    /// Toggled by the user after import; the engine always creates entries unselected.
    pub selected: bool,
    /// Every category this note qualified for, in catalog order.
    pub categories: Vec<String>,
    /// Start of the admission episode the entry was matched against.
    pub episode_start: Option<NaiveDate>,
}

/// Category → entries, each bucket newest-first with undated entries last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    buckets: BTreeMap<String, Vec<ImportedEntry>>,
}

impl ClassificationResult {
    /// Build from unsorted buckets. Empty buckets are dropped.
    pub fn from_buckets(buckets: BTreeMap<String, Vec<ImportedEntry>>) -> Self {
        let buckets = buckets
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, mut entries)| {
                sort_newest_first(&mut entries);
                (category, entries)
            })
            .collect();
        Self { buckets }
    }

    pub fn get(&self, category: &str) -> &[ImportedEntry] {
        self.buckets.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Every entry, bucket by bucket.
    pub fn entries(&self) -> impl Iterator<Item = &ImportedEntry> {
        self.buckets.values().flatten()
    }

    /// Total entries across all buckets (a note in two buckets counts twice).
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<ImportedEntry>> {
        self.buckets
    }
}

/// Newest first; undated entries keep their relative order at the end.
fn sort_newest_first(entries: &mut [ImportedEntry]) {
    entries.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
