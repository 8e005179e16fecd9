use serde::{Deserialize, Serialize};

/// Summary of a built similarity index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub items: usize,
    pub vocabulary_size: usize,
    /// Non-zero entries in the term-weight matrix.
    pub non_zero_weights: usize,
    pub empty_descriptions: usize,
    /// Rows unreachable by title because an earlier row has the same title.
    pub shadowed_titles: usize,
    pub content_hash: String,
}
