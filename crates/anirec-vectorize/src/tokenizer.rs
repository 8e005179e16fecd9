//! Word-boundary tokenizer with lower-casing, minimum length, and stop words.

use std::sync::LazyLock;

use anirec_core::config::VectorizerConfig;
use regex::Regex;

use crate::stopwords::StopWordFilter;

/// Runs of Unicode word characters.
static WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

/// Splits free text into index terms.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
    min_token_len: usize,
    stop_words: StopWordFilter,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&VectorizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(lowercase: bool, min_token_len: usize, stop_words: StopWordFilter) -> Self {
        Self {
            lowercase,
            min_token_len,
            stop_words,
        }
    }

    pub fn from_config(config: &VectorizerConfig) -> Self {
        Self::new(
            config.lowercase,
            config.min_token_len,
            StopWordFilter::from_config(&config.stop_words),
        )
    }

    /// Tokenize `text` in order of appearance, duplicates kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let words: Vec<&str> = match WORD_PATTERN.as_ref() {
            Some(re) => re.find_iter(&text).map(|m| m.as_str()).collect(),
            None => text
                .split(|c: char| !c.is_alphanumeric() && c != '_')
                .filter(|s| !s.is_empty())
                .collect(),
        };

        words
            .into_iter()
            .filter(|w| w.chars().count() >= self.min_token_len)
            .filter(|w| !self.stop_words.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }
}
