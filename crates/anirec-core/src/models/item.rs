use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `title` is the external key. `description` is never null: missing
/// values are normalized to the empty string before an item is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    /// Extra source columns (genre, type, episodes, ...) kept for display.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Item {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The first `max_chars` characters of the description, never
    /// splitting a character.
    pub fn description_excerpt(&self, max_chars: usize) -> &str {
        match self.description.char_indices().nth(max_chars) {
            Some((byte, _)) => &self.description[..byte],
            None => &self.description,
        }
    }

    /// Look up an extra attribute by column name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
