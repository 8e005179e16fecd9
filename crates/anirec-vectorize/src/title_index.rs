//! Title → row lookup. The first occurrence of a title wins.

use std::collections::HashMap;

use anirec_core::models::Item;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, usize>,
    shadowed: usize,
}

impl TitleIndex {
    /// Index `items` in catalog order. Later rows with an already-seen
    /// title are skipped and counted as shadowed.
    pub fn build(items: &[Item]) -> Self {
        let mut rows = HashMap::with_capacity(items.len());
        let mut shadowed = 0;
        for (row, item) in items.iter().enumerate() {
            if rows.contains_key(&item.title) {
                debug!(title = %item.title, row, "duplicate title shadowed");
                shadowed += 1;
            } else {
                rows.insert(item.title.clone(), row);
            }
        }
        Self { rows, shadowed }
    }

    pub fn get(&self, title: &str) -> Option<usize> {
        self.rows.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.rows.contains_key(title)
    }

    /// Number of addressable titles.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows unreachable by title.
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }

    /// All indexed titles, sorted.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.rows.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }
}
