use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do with favorite titles that are not in the title index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTitlePolicy {
    /// Drop silently.
    Ignore,
    /// Drop, log a warning, and report them on the result.
    #[default]
    Warn,
    /// Fail the request.
    Reject,
}

/// Recommendation boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Result count used when the caller does not pass one.
    pub default_top_n: usize,
    /// Largest accepted `top_n`.
    pub max_top_n: usize,
    /// Result count for free-text search.
    pub search_top_k: usize,
    pub unknown_title_policy: UnknownTitlePolicy,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            max_top_n: defaults::DEFAULT_MAX_TOP_N,
            search_top_k: defaults::DEFAULT_SEARCH_TOP_K,
            unknown_title_policy: UnknownTitlePolicy::default(),
        }
    }
}
