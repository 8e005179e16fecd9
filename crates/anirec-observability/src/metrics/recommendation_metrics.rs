//! Query counts, empty results, unknown favorites, fallbacks, explanation
//! outcomes, index rebuilds, and ranking latency.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const MAX_LATENCY_SAMPLES: usize = 10_000;

/// Recommendation subsystem metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetrics {
    pub queries: u64,
    /// Queries that returned no recommendations.
    pub empty_results: u64,
    /// Favorite titles that matched nothing, summed over all queries.
    pub unknown_favorites: u64,
    /// Times a provider failed and the chain fell back.
    pub fallbacks: u64,
    pub explanations_generated: u64,
    pub explanation_failures: u64,
    pub index_rebuilds: u64,
    /// Queries answered per provider.
    pub provider_usage: HashMap<String, u64>,
    latency_samples_us: Vec<u64>,
}

impl RecommendationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one answered query.
    pub fn record_query(&mut self, provider: &str, results: usize, unknown: usize, latency: Duration) {
        self.queries += 1;
        if results == 0 {
            self.empty_results += 1;
        }
        self.unknown_favorites += unknown as u64;
        *self.provider_usage.entry(provider.to_string()).or_default() += 1;

        self.latency_samples_us.push(latency.as_micros() as u64);
        if self.latency_samples_us.len() > MAX_LATENCY_SAMPLES {
            self.latency_samples_us
                .drain(..self.latency_samples_us.len() - MAX_LATENCY_SAMPLES);
        }
    }

    pub fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }

    pub fn record_explanation(&mut self, success: bool) {
        if success {
            self.explanations_generated += 1;
        } else {
            self.explanation_failures += 1;
        }
    }

    pub fn record_rebuild(&mut self) {
        self.index_rebuilds += 1;
    }

    /// Fraction of queries with no results.
    pub fn empty_result_rate(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.empty_results as f64 / self.queries as f64
        }
    }

    /// Ranking latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.latency_samples_us.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.latency_samples_us.clone();
        sorted.sort_unstable();
        let idx = ((p * (sorted.len() - 1) as f64).round() as usize).min(sorted.len() - 1);
        Duration::from_micros(sorted[idx])
    }

    /// Metrics as a JSON value for reporting.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "queries": self.queries,
            "empty_results": self.empty_results,
            "empty_result_rate": self.empty_result_rate(),
            "unknown_favorites": self.unknown_favorites,
            "fallbacks": self.fallbacks,
            "explanations_generated": self.explanations_generated,
            "explanation_failures": self.explanation_failures,
            "index_rebuilds": self.index_rebuilds,
            "provider_usage": self.provider_usage,
            "latency_p50_us": self.latency_percentile(0.5).as_micros() as u64,
            "latency_p95_us": self.latency_percentile(0.95).as_micros() as u64,
        })
    }
}
