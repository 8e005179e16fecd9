use serde::{Deserialize, Serialize};

use super::defaults;

/// Stop-word list applied after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// The standard English list.
    English,
    /// Keep every token.
    None,
    /// A caller-supplied list.
    Custom(Vec<String>),
}

/// TF-IDF vectorizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Lower-case text before tokenizing.
    pub lowercase: bool,
    /// Minimum number of word characters per token.
    pub min_token_len: usize,
    pub stop_words: StopWords,
    /// Add one to document frequencies as if an extra document contained every term.
    pub smooth_idf: bool,
    /// Replace raw term counts with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            lowercase: defaults::DEFAULT_LOWERCASE,
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            stop_words: StopWords::English,
            smooth_idf: defaults::DEFAULT_SMOOTH_IDF,
            sublinear_tf: defaults::DEFAULT_SUBLINEAR_TF,
        }
    }
}
