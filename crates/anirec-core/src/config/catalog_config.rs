use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the catalog comes from and which columns carry the item fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the CSV catalog.
    pub path: String,
    /// Column holding the display title.
    pub title_column: String,
    /// Column holding the free-text description.
    pub description_column: String,
    /// Column holding comma-separated genres (stats only).
    pub genre_column: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            title_column: defaults::DEFAULT_TITLE_COLUMN.to_string(),
            description_column: defaults::DEFAULT_DESCRIPTION_COLUMN.to_string(),
            genre_column: defaults::DEFAULT_GENRE_COLUMN.to_string(),
        }
    }
}
