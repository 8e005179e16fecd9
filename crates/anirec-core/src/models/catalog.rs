use serde::{Deserialize, Serialize};

use super::Item;

const FIELD_SEPARATOR: u8 = 0x1f;
const ROW_SEPARATOR: u8 = 0x1e;

/// An immutable, ordered catalog snapshot.
///
/// The content hash covers every title and description in row order and is
/// the trigger for rebuilding a similarity index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
    content_hash: String,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        let content_hash = Self::compute_content_hash(&items);
        Self {
            items,
            content_hash,
        }
    }

    /// An empty catalog. Valid input: it yields an empty index.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// blake3 hex digest of titles and descriptions, row order significant.
    /// Extra attributes do not participate.
    pub fn compute_content_hash(items: &[Item]) -> String {
        let mut hasher = blake3::Hasher::new();
        for item in items {
            hasher.update(item.title.as_bytes());
            hasher.update(&[FIELD_SEPARATOR]);
            hasher.update(item.description.as_bytes());
            hasher.update(&[ROW_SEPARATOR]);
        }
        hasher.finalize().to_hex().to_string()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, row: usize) -> Option<&Item> {
        self.items.get(row)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// The first `n` items.
    pub fn head(&self, n: usize) -> &[Item] {
        &self.items[..n.min(self.items.len())]
    }

    /// Descriptions in row order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.description.as_str())
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
