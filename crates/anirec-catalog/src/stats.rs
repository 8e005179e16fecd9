//! Dataset statistics.

use std::collections::{BTreeSet, HashSet};

use anirec_core::models::Catalog;
use serde::{Deserialize, Serialize};

use crate::preprocess::split_genres;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_items: usize,
    /// Distinct genres across the genre column, sorted.
    pub genres: BTreeSet<String>,
    pub empty_descriptions: usize,
    /// Rows whose title already appeared earlier in the catalog.
    pub duplicate_titles: usize,
}

impl CatalogStats {
    /// Compute statistics; genres are read from the `genre_column` attribute.
    pub fn compute(catalog: &Catalog, genre_column: &str) -> Self {
        let mut seen = HashSet::new();
        let mut stats = Self {
            total_items: catalog.len(),
            ..Default::default()
        };

        for item in catalog.items() {
            if item.description.is_empty() {
                stats.empty_descriptions += 1;
            }
            if !seen.insert(item.title.as_str()) {
                stats.duplicate_titles += 1;
            }
            if let Some(cell) = item.attribute(genre_column) {
                stats.genres.extend(split_genres(cell).map(str::to_string));
            }
        }
        stats
    }

    pub fn unique_genres(&self) -> usize {
        self.genres.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anirec_core::models::Item;

    #[test]
    fn counts_everything() {
        let catalog = Catalog::new(vec![
            Item::new("A", "x").with_attribute("Genre", "Action, Sci-Fi"),
            Item::new("B", "").with_attribute("Genre", "Action,Drama"),
            Item::new("A", "y"),
        ]);
        let stats = CatalogStats::compute(&catalog, "Genre");
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.unique_genres(), 3);
        assert_eq!(stats.empty_descriptions, 1);
        assert_eq!(stats.duplicate_titles, 1);
        assert!(stats.genres.contains("Sci-Fi"));
    }

    #[test]
    fn empty_catalog() {
        let stats = CatalogStats::compute(&Catalog::empty(), "Genre");
        assert_eq!(stats, CatalogStats::default());
    }
}
