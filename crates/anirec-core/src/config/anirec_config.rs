//! Top-level anirec configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CatalogConfig, ExplainConfig, ObservabilityConfig, RecommendConfig, StopWords,
    VectorizerConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`ANIREC_*`, `OLLAMA_URL`, `LLM_MODEL`)
/// 3. Config file (TOML)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnirecConfig {
    pub catalog: CatalogConfig,
    pub vectorizer: VectorizerConfig,
    pub recommend: RecommendConfig,
    pub explain: ExplainConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<String>,
    pub explain_provider: Option<String>,
    pub log_level: Option<String>,
}

impl AnirecConfig {
    /// Load configuration from an optional TOML file, the process
    /// environment and CLI overrides, then validate it.
    pub fn load(
        path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env or CLI layers.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.title_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.title_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.catalog.description_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.description_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.vectorizer.min_token_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "vectorizer.min_token_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let StopWords::Custom(words) = &self.vectorizer.stop_words {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: "vectorizer.stop_words".to_string(),
                    message: "custom stop words must not be blank".to_string(),
                });
            }
        }
        if self.recommend.max_top_n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.max_top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.recommend.default_top_n == 0
            || self.recommend.default_top_n > self.recommend.max_top_n
        {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.default_top_n".to_string(),
                message: format!("must be between 1 and {}", self.recommend.max_top_n),
            });
        }
        if self.recommend.search_top_k == 0
            || self.recommend.search_top_k > self.recommend.max_top_n
        {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.search_top_k".to_string(),
                message: format!("must be between 1 and {}", self.recommend.max_top_n),
            });
        }
        if !matches!(
            self.explain.provider.as_str(),
            "none" | "template" | "ollama"
        ) {
            return Err(ConfigError::ValidationFailed {
                field: "explain.provider".to_string(),
                message: format!(
                    "unknown provider '{}', expected none, template or ollama",
                    self.explain.provider
                ),
            });
        }
        if !(0.0..=2.0).contains(&self.explain.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "explain.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.explain.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "explain.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides read through `lookup`.
    ///
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ANIREC_CATALOG_PATH") {
            self.catalog.path = val;
        }
        if let Some(val) = lookup("ANIREC_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                self.recommend.default_top_n = v;
            }
        }
        if let Some(val) = lookup("ANIREC_EXPLAIN_PROVIDER") {
            self.explain.provider = val;
        }
        if let Some(val) = lookup("OLLAMA_URL") {
            self.explain.base_url = val;
        }
        if let Some(val) = lookup("LLM_MODEL") {
            self.explain.model = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.catalog_path {
            self.catalog.path = v.clone();
        }
        if let Some(ref v) = cli.explain_provider {
            self.explain.provider = v.clone();
        }
        if let Some(ref v) = cli.log_level {
            self.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
