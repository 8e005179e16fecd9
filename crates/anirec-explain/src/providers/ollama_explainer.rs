//! Ollama local LLM explainer.
//!
//! POSTs to `{base_url}/api/generate` with streaming off and reads the
//! `response` field. Availability is set by [`OllamaExplainer::health_check`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anirec_core::config::ExplainConfig;
use anirec_core::errors::{AnirecResult, ExplainError};
use anirec_core::models::{Item, Recommendation};
use anirec_core::traits::IExplainer;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::prompt;

pub struct OllamaExplainer {
    base_url: String,
    model: String,
    timeout: Duration,
    health_timeout: Duration,
    temperature: f32,
    num_predict: u32,
    available: AtomicBool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaExplainer {
    /// Create an explainer from config. Unavailable until a health check passes.
    pub fn new(config: &ExplainConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            health_timeout: Duration::from_secs(config.health_timeout_secs),
            temperature: config.temperature,
            num_predict: config.num_predict,
            available: AtomicBool::new(false),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check if the Ollama server is reachable and update availability.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(_) => return false,
        };

        let timeout = self.health_timeout;
        let result = rt.block_on(async {
            reqwest::Client::new()
                .get(&url)
                .timeout(timeout)
                .send()
                .await
        });

        let ok = match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    pub(crate) fn request<'a>(&'a self, prompt: &'a str, system: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
        }
    }

    fn generate(&self, prompt: &str, system: &str) -> Result<String, ExplainError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(ExplainError::ProviderUnavailable {
                provider: self.name().to_string(),
            });
        }

        let url = format!("{}/api/generate", self.base_url);
        let request = self.request(prompt, system);

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ExplainError::RequestFailed {
                reason: format!("runtime error: {e}"),
            })?;

        let timeout = self.timeout;
        let result: Result<String, ExplainError> = rt.block_on(async {
            let response = reqwest::Client::new()
                .post(&url)
                .timeout(timeout)
                .json(&request)
                .send()
                .await
                .map_err(|e| ExplainError::RequestFailed {
                    reason: format!("Ollama HTTP error: {e}"),
                })?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(ExplainError::RequestFailed {
                    reason: format!("Ollama returned {status}: {body}"),
                });
            }

            let parsed: GenerateResponse =
                response
                    .json()
                    .await
                    .map_err(|e| ExplainError::RequestFailed {
                        reason: format!("Ollama JSON parse error: {e}"),
                    })?;
            Ok(parsed.response)
        });

        let text = result?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ExplainError::EmptyResponse {
                provider: self.name().to_string(),
            });
        }
        Ok(text.to_string())
    }
}

impl IExplainer for OllamaExplainer {
    fn explain(&self, recommendation: &Recommendation, favorites: &[String]) -> AnirecResult<String> {
        let prompt = prompt::explain_prompt(recommendation, favorites);
        Ok(self.generate(&prompt, prompt::EXPLAIN_SYSTEM_PROMPT)?)
    }

    fn pitch(&self, item: &Item) -> AnirecResult<String> {
        let prompt = prompt::pitch_prompt(item);
        Ok(self.generate(&prompt, prompt::PITCH_SYSTEM_PROMPT)?)
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
