//! Fallback chain for recommendation providers.
//!
//! Providers are tried in priority order; unavailable ones are skipped. A
//! provider error falls through to the next one and, once a lower-priority
//! provider answers, a `DegradationEvent` is recorded.

use anirec_core::constants::RECOMMEND_COMPONENT;
use anirec_core::errors::{AnirecResult, RecommendError};
use anirec_core::models::{DegradationEvent, Recommendation};
use anirec_core::traits::IRecommendationProvider;
use chrono::Utc;
use tracing::warn;

/// Providers in priority order plus the degradation events of this session.
pub struct DegradationChain {
    chain: Vec<Box<dyn IRecommendationProvider>>,
    events: Vec<DegradationEvent>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    pub fn new() -> Self {
        Self {
            chain: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add a provider at the lowest priority.
    pub fn push(&mut self, provider: Box<dyn IRecommendationProvider>) {
        self.chain.push(provider);
    }

    /// Add a provider at the highest priority.
    pub fn push_front(&mut self, provider: Box<dyn IRecommendationProvider>) {
        self.chain.insert(0, provider);
    }

    /// Rank with the first provider that succeeds.
    ///
    /// Returns the recommendations and the name of the provider that
    /// produced them. Falling back past the first available provider is
    /// recorded as a degradation event.
    pub fn recommend(
        &mut self,
        favorites: &[String],
        top_n: usize,
    ) -> AnirecResult<(Vec<Recommendation>, String)> {
        let mut failures: Vec<String> = Vec::new();
        let mut last_error = None;

        for provider in self.chain.iter().filter(|p| p.is_available()) {
            match provider.recommend(favorites, top_n) {
                Ok(recs) => {
                    if !failures.is_empty() {
                        self.events.push(DegradationEvent {
                            component: RECOMMEND_COMPONENT.to_string(),
                            failure: failures.join("; "),
                            fallback_used: provider.name().to_string(),
                            timestamp: Utc::now(),
                        });
                    }
                    return Ok((recs, provider.name().to_string()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                    failures.push(format!("{}: {e}", provider.name()));
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            RecommendError::ProviderUnavailable {
                provider: "all providers exhausted".to_string(),
            }
            .into()
        }))
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Names of all providers in priority order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.iter().map(|p| p.name()).collect()
    }

    pub fn drain_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
