//! Export Cache Module
//!
//! Maps each dataset to its latest serialized CSV text.

use std::collections::HashMap;

use crate::datasets::Dataset;

// == Export Cache ==
/// Latest published CSV text per dataset.
///
/// Starts empty; an entry appears after the first successful refresh of its
/// dataset and is replaced wholesale on every later one, never merged.
#[derive(Debug, Default)]
pub struct ExportCache {
    entries: HashMap<Dataset, String>,
}

impl ExportCache {
    /// Creates an empty cache. No dataset is available until refreshed.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Replaces the cached CSV text for a dataset.
    pub fn insert(&mut self, dataset: Dataset, csv_text: String) {
        self.entries.insert(dataset, csv_text);
    }

    /// Returns the cached CSV text for a dataset, if populated.
    pub fn get(&self, dataset: Dataset) -> Option<&str> {
        self.entries.get(&dataset).map(String::as_str)
    }

    /// Returns the number of populated datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no dataset has been populated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
