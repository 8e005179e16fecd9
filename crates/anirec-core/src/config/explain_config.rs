use serde::{Deserialize, Serialize};

use super::defaults;

/// Explanation collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// Explainer: "none", "template", "ollama".
    pub provider: String,
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Generative model name.
    pub model: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Health check timeout.
    pub health_timeout_secs: u64,
    pub temperature: f32,
    /// Maximum generated tokens.
    pub num_predict: u32,
    /// In-memory explanation cache max entries.
    pub cache_size: u64,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EXPLAIN_PROVIDER.to_string(),
            base_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_EXPLAIN_TIMEOUT_SECS,
            health_timeout_secs: defaults::DEFAULT_HEALTH_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            num_predict: defaults::DEFAULT_NUM_PREDICT,
            cache_size: defaults::DEFAULT_EXPLAIN_CACHE_SIZE,
        }
    }
}
