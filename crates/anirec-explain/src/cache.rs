//! In-memory explanation cache using moka.
//!
//! Keys are blake3 hashes of (explainer, title, favorites). Only successful
//! explanations are cached, so a failed call is retried next time.

use std::time::Duration;

use anirec_core::errors::AnirecResult;
use anirec_core::models::{Item, Recommendation};
use anirec_core::traits::IExplainer;
use moka::sync::Cache;
use tracing::debug;

const FIELD_SEPARATOR: &[u8] = &[0x1f];

/// Caching wrapper around any explainer.
pub struct CachedExplainer {
    inner: Box<dyn IExplainer>,
    cache: Cache<String, String>,
}

impl CachedExplainer {
    pub fn new(inner: Box<dyn IExplainer>, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { inner, cache }
    }

    /// Cache key for an explanation request.
    pub fn explain_key(explainer: &str, title: &str, favorites: &[String]) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"explain");
        hasher.update(FIELD_SEPARATOR);
        hasher.update(explainer.as_bytes());
        hasher.update(FIELD_SEPARATOR);
        hasher.update(title.as_bytes());
        for favorite in favorites {
            hasher.update(FIELD_SEPARATOR);
            hasher.update(favorite.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    fn pitch_key(explainer: &str, title: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"pitch");
        hasher.update(FIELD_SEPARATOR);
        hasher.update(explainer.as_bytes());
        hasher.update(FIELD_SEPARATOR);
        hasher.update(title.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    fn cached(&self, key: String, compute: impl FnOnce() -> AnirecResult<String>) -> AnirecResult<String> {
        if let Some(hit) = self.cache.get(&key) {
            debug!(explainer = self.inner.name(), "explanation cache hit");
            return Ok(hit);
        }
        let text = compute()?;
        self.cache.insert(key, text.clone());
        Ok(text)
    }

    /// Number of cached entries (approximate until pending tasks run).
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IExplainer for CachedExplainer {
    fn explain(&self, recommendation: &Recommendation, favorites: &[String]) -> AnirecResult<String> {
        let key = Self::explain_key(self.inner.name(), &recommendation.title, favorites);
        self.cached(key, || self.inner.explain(recommendation, favorites))
    }

    fn pitch(&self, item: &Item) -> AnirecResult<String> {
        let key = Self::pitch_key(self.inner.name(), &item.title);
        self.cached(key, || self.inner.pitch(item))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
