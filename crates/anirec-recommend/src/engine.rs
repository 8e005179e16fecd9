//! RecommendationEngine: the session-level entry point.
//!
//! Owns the current index (rebuilt only when the catalog content hash
//! changes), the provider chain, an optional explainer, and metrics.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use anirec_core::config::{AnirecConfig, UnknownTitlePolicy};
use anirec_core::constants::{EXPLAIN_COMPONENT, PITCH_FALLBACK_CHARS};
use anirec_core::errors::{AnirecResult, RecommendError};
use anirec_core::models::{Catalog, DegradationEvent, IndexStats, Recommendation, RecommendationSet};
use anirec_core::traits::{IExplainer, IRecommendationProvider};
use anirec_observability::tracing_setup::events;
use anirec_observability::RecommendationMetrics;
use anirec_vectorize::SimilarityIndex;
use chrono::Utc;
use tracing::{debug, info};

use crate::degradation::DegradationChain;
use crate::providers;
use crate::ranking;

/// Name recorded as `fallback_used` when a pitch falls back to the synopsis.
const PITCH_FALLBACK: &str = "synopsis excerpt";

pub struct RecommendationEngine {
    index: Arc<SimilarityIndex>,
    chain: DegradationChain,
    explainer: Option<Box<dyn IExplainer>>,
    config: AnirecConfig,
    metrics: RecommendationMetrics,
    degradations: Vec<DegradationEvent>,
}

impl RecommendationEngine {
    /// Build the index for `catalog` and a TF-IDF-only provider chain.
    pub fn new(catalog: Catalog, config: AnirecConfig) -> Self {
        let index = Arc::new(SimilarityIndex::build(catalog, &config.vectorizer));
        let chain = providers::default_chain(Arc::clone(&index));
        Self {
            index,
            chain,
            explainer: None,
            config,
            metrics: RecommendationMetrics::new(),
            degradations: Vec::new(),
        }
    }

    /// Attach an explainer used by [`Self::recommend_explained`].
    pub fn with_explainer(mut self, explainer: Box<dyn IExplainer>) -> Self {
        info!(explainer = explainer.name(), "explainer attached");
        self.explainer = Some(explainer);
        self
    }

    /// Register a provider ahead of TF-IDF. TF-IDF stays as the fallback.
    ///
    /// Registered providers are bound to the catalog they were built for
    /// and are dropped when [`Self::refresh`] rebuilds the index.
    pub fn push_primary_provider(&mut self, provider: Box<dyn IRecommendationProvider>) {
        info!(provider = provider.name(), "primary provider registered");
        self.chain.push_front(provider);
    }

    /// Rebuild the index if `catalog` differs from the current one.
    ///
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self, catalog: Catalog) -> bool {
        if catalog.content_hash() == self.index.content_hash() {
            debug!(hash = %catalog.content_hash(), "catalog unchanged, index kept");
            return false;
        }

        let previous = self.index.content_hash().to_string();
        let dropped = self.chain.len().saturating_sub(1);
        self.index = Arc::new(SimilarityIndex::build(catalog, &self.config.vectorizer));
        self.chain = providers::default_chain(Arc::clone(&self.index));
        self.metrics.record_rebuild();
        if dropped > 0 {
            info!(dropped, "external providers dropped on rebuild");
        }
        events::index_rebuilt(self.index.len(), &previous, self.index.content_hash());
        true
    }

    /// Reject `top_n` outside `1..=max_top_n`.
    pub fn validate_top_n(&self, top_n: usize) -> Result<(), RecommendError> {
        let max = self.config.recommend.max_top_n;
        if top_n == 0 || top_n > max {
            return Err(RecommendError::InvalidTopN { top_n, max });
        }
        Ok(())
    }

    /// Rank non-favorite items for `favorites`.
    ///
    /// Unknown favorites are handled per `recommend.unknown_title_policy`.
    pub fn recommend(&mut self, favorites: &[String], top_n: usize) -> AnirecResult<RecommendationSet> {
        self.validate_top_n(top_n)?;
        let started = Instant::now();

        let unknown = ranking::unknown_favorites(favorites, self.index.title_index());
        let reported = match self.config.recommend.unknown_title_policy {
            UnknownTitlePolicy::Reject => {
                if let Some(title) = unknown.first() {
                    return Err(RecommendError::UnknownTitle {
                        title: title.clone(),
                    }
                    .into());
                }
                Vec::new()
            }
            UnknownTitlePolicy::Warn => {
                if !unknown.is_empty() {
                    events::unknown_favorites(&unknown);
                }
                unknown.clone()
            }
            UnknownTitlePolicy::Ignore => Vec::new(),
        };

        let (recommendations, provider) = if favorites.is_empty() {
            (Vec::new(), self.chain.active_provider_name().to_string())
        } else {
            self.chain.recommend(favorites, top_n)?
        };

        for event in self.chain.drain_events() {
            events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
            self.metrics.record_fallback();
            self.degradations.push(event);
        }

        self.metrics
            .record_query(&provider, recommendations.len(), unknown.len(), started.elapsed());
        events::recommendation_served(favorites.len(), recommendations.len(), &provider);

        Ok(RecommendationSet {
            recommendations,
            provider,
            unknown_favorites: reported,
        })
    }

    /// Recommend, then attach an explanation to each item.
    ///
    /// Explainer failures never fail the call: the affected items keep
    /// `explanation = None`.
    pub fn recommend_explained(
        &mut self,
        favorites: &[String],
        top_n: usize,
    ) -> AnirecResult<RecommendationSet> {
        let mut set = self.recommend(favorites, top_n)?;
        self.attach_explanations(&mut set.recommendations, favorites);
        Ok(set)
    }

    fn attach_explanations(&mut self, recommendations: &mut [Recommendation], favorites: &[String]) {
        let Some(explainer) = self.explainer.as_ref() else {
            return;
        };
        if recommendations.is_empty() {
            return;
        }
        if !explainer.is_available() {
            events::explanation_failed("*", explainer.name(), "explainer unavailable");
            for _ in recommendations.iter() {
                self.metrics.record_explanation(false);
            }
            return;
        }

        // Only titles that exist in the catalog are meaningful in a prompt.
        let titles = self.index.title_index();
        let mut seen = HashSet::new();
        let known: Vec<String> = favorites
            .iter()
            .filter(|f| titles.contains(f) && seen.insert(f.as_str()))
            .cloned()
            .collect();

        for rec in recommendations.iter_mut() {
            match explainer.explain(rec, &known) {
                Ok(text) if !text.trim().is_empty() => {
                    rec.explanation = Some(text.trim().to_string());
                    self.metrics.record_explanation(true);
                }
                Ok(_) => {
                    events::explanation_failed(&rec.title, explainer.name(), "empty explanation");
                    self.metrics.record_explanation(false);
                }
                Err(e) => {
                    events::explanation_failed(&rec.title, explainer.name(), &e.to_string());
                    self.metrics.record_explanation(false);
                }
            }
        }
    }

    /// Free-text search over the TF-IDF space.
    pub fn search(&self, query: &str, top_k: usize) -> AnirecResult<Vec<Recommendation>> {
        self.validate_top_n(top_k)?;
        Ok(self.index.search(query, top_k))
    }

    /// Short pitch for the item titled `title`; `None` for unknown titles.
    ///
    /// When no explainer answers, the pitch is the opening of the synopsis
    /// and the fallback is recorded as a degradation event.
    pub fn pitch(&mut self, title: &str) -> Option<String> {
        let index = Arc::clone(&self.index);
        let row = index.title_index().get(title)?;
        let item = index.catalog().get(row)?;
        let excerpt = || item.description_excerpt(PITCH_FALLBACK_CHARS).to_string();

        let Some(explainer) = self.explainer.as_ref() else {
            return Some(excerpt());
        };
        let failure = if explainer.is_available() {
            match explainer.pitch(item) {
                Ok(text) if !text.trim().is_empty() => {
                    self.metrics.record_explanation(true);
                    return Some(text.trim().to_string());
                }
                Ok(_) => "empty pitch".to_string(),
                Err(e) => e.to_string(),
            }
        } else {
            "explainer unavailable".to_string()
        };

        events::explanation_failed(title, explainer.name(), &failure);
        events::degradation_triggered(EXPLAIN_COMPONENT, &failure, PITCH_FALLBACK);
        self.metrics.record_explanation(false);
        self.degradations.push(DegradationEvent {
            component: EXPLAIN_COMPONENT.to_string(),
            failure,
            fallback_used: PITCH_FALLBACK.to_string(),
            timestamp: Utc::now(),
        });
        Some(excerpt())
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// The current index. Cheap to clone and safe to share across threads.
    pub fn index(&self) -> Arc<SimilarityIndex> {
        Arc::clone(&self.index)
    }

    pub fn config(&self) -> &AnirecConfig {
        &self.config
    }

    pub fn metrics(&self) -> &RecommendationMetrics {
        &self.metrics
    }

    pub fn explainer_name(&self) -> Option<&str> {
        self.explainer.as_ref().map(|e| e.name())
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.provider_names()
    }

    /// Degradation events recorded since the last drain.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.degradations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anirec_core::errors::{AnirecError, ExplainError};
    use anirec_core::models::Item;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("A", "robots fight in space"),
            Item::new("B", "robots fight in space"),
            Item::new("C", "romance in school"),
        ])
    }

    fn favs(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(catalog(), AnirecConfig::default())
    }

    struct EchoExplainer;
    impl IExplainer for EchoExplainer {
        fn explain(&self, rec: &Recommendation, favorites: &[String]) -> AnirecResult<String> {
            Ok(format!("{} <- {}", rec.title, favorites.join(",")))
        }
        fn pitch(&self, item: &Item) -> AnirecResult<String> {
            Ok(format!("watch {}", item.title))
        }
        fn name(&self) -> &str {
            "echo"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct BrokenExplainer;
    impl IExplainer for BrokenExplainer {
        fn explain(&self, _: &Recommendation, _: &[String]) -> AnirecResult<String> {
            Err(ExplainError::RequestFailed {
                reason: "connection refused".to_string(),
            }
            .into())
        }
        fn pitch(&self, _: &Item) -> AnirecResult<String> {
            Err(ExplainError::RequestFailed {
                reason: "connection refused".to_string(),
            }
            .into())
        }
        fn name(&self) -> &str {
            "broken"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn recommend_scenario() {
        let mut e = engine();
        let set = e.recommend(&favs(&["A"]), 2).unwrap();
        assert_eq!(set.titles(), vec!["B", "C"]);
        assert_eq!(set.provider, "tfidf");
        assert!(set.unknown_favorites.is_empty());
        assert_eq!(e.metrics().queries, 1);
    }

    #[test]
    fn top_n_bounds_are_validated() {
        let mut e = engine();
        let err = e.recommend(&favs(&["A"]), 0).unwrap_err();
        assert!(matches!(
            err,
            AnirecError::RecommendError(RecommendError::InvalidTopN { top_n: 0, max: 100 })
        ));
        assert!(e.recommend(&favs(&["A"]), 101).is_err());
        assert!(e.recommend(&favs(&["A"]), 100).is_ok());
    }

    #[test]
    fn empty_favorites_give_empty_set() {
        let mut e = engine();
        let set = e.recommend(&[], 5).unwrap();
        assert!(set.is_empty());
        assert_eq!(e.metrics().empty_results, 1);
    }

    #[test]
    fn warn_policy_reports_unknown() {
        let mut e = engine();
        let set = e.recommend(&favs(&["Z", "A"]), 5).unwrap();
        assert_eq!(set.unknown_favorites, vec!["Z".to_string()]);
        assert_eq!(set.titles(), vec!["B", "C"]);
        assert_eq!(e.metrics().unknown_favorites, 1);
    }

    #[test]
    fn ignore_policy_stays_silent() {
        let mut config = AnirecConfig::default();
        config.recommend.unknown_title_policy = UnknownTitlePolicy::Ignore;
        let mut e = RecommendationEngine::new(catalog(), config);
        let set = e.recommend(&favs(&["Z"]), 5).unwrap();
        assert!(set.is_empty());
        assert!(set.unknown_favorites.is_empty());
    }

    #[test]
    fn reject_policy_fails_on_unknown() {
        let mut config = AnirecConfig::default();
        config.recommend.unknown_title_policy = UnknownTitlePolicy::Reject;
        let mut e = RecommendationEngine::new(catalog(), config);
        let err = e.recommend(&favs(&["A", "Z"]), 5).unwrap_err();
        assert!(matches!(
            err,
            AnirecError::RecommendError(RecommendError::UnknownTitle { ref title }) if title == "Z"
        ));
        assert!(e.recommend(&favs(&["A"]), 5).is_ok());
    }

    #[test]
    fn refresh_only_on_content_change() {
        let mut e = engine();
        assert!(!e.refresh(catalog()));
        assert_eq!(e.metrics().index_rebuilds, 0);

        let mut items = catalog().items().to_vec();
        items.push(Item::new("D", "robots in space"));
        assert!(e.refresh(Catalog::new(items)));
        assert_eq!(e.metrics().index_rebuilds, 1);
        assert_eq!(e.stats().items, 4);
        assert_eq!(e.recommend(&favs(&["A"]), 1).unwrap().titles(), vec!["B"]);
    }

    #[test]
    fn explanations_attached() {
        let mut e = engine().with_explainer(Box::new(EchoExplainer));
        let set = e.recommend_explained(&favs(&["A", "Z"]), 2).unwrap();
        assert_eq!(set.recommendations[0].explanation.as_deref(), Some("B <- A"));
        assert_eq!(e.metrics().explanations_generated, 2);
        assert_eq!(e.explainer_name(), Some("echo"));
        assert_eq!(e.pitch("C").as_deref(), Some("watch C"));
        assert_eq!(e.pitch("Z"), None);
    }

    #[test]
    fn explainer_failure_keeps_recommendations() {
        let mut e = engine().with_explainer(Box::new(BrokenExplainer));
        let set = e.recommend_explained(&favs(&["A"]), 2).unwrap();
        assert_eq!(set.titles(), vec!["B", "C"]);
        assert!(set.recommendations.iter().all(|r| r.explanation.is_none()));
        assert_eq!(e.metrics().explanation_failures, 2);
    }

    #[test]
    fn failed_pitch_falls_back_to_synopsis() {
        let mut e = engine().with_explainer(Box::new(BrokenExplainer));
        assert_eq!(e.pitch("C").as_deref(), Some("romance in school"));
        assert_eq!(e.pitch("Z"), None);
        assert_eq!(e.metrics().explanation_failures, 1);

        let events = e.drain_degradation_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component, EXPLAIN_COMPONENT);
        assert_eq!(events[0].fallback_used, "synopsis excerpt");
        assert!(events[0].failure.contains("connection refused"));
    }

    #[test]
    fn pitch_without_explainer_is_synopsis_excerpt() {
        let long = "x".repeat(400);
        let mut e = RecommendationEngine::new(
            Catalog::new(vec![Item::new("A", long.as_str()), Item::new("B", "")]),
            AnirecConfig::default(),
        );
        assert_eq!(e.pitch("A").map(|p| p.chars().count()), Some(150));
        assert_eq!(e.pitch("B").as_deref(), Some(""));
        assert!(e.drain_degradation_events().is_empty());
    }

    #[test]
    fn without_explainer_nothing_is_attached() {
        let mut e = engine();
        let set = e.recommend_explained(&favs(&["A"]), 2).unwrap();
        assert!(set.recommendations.iter().all(|r| r.explanation.is_none()));
    }

    #[test]
    fn search_validates_top_k() {
        let e = engine();
        assert_eq!(e.search("school", 5).unwrap()[0].title, "C");
        assert!(e.search("school", 0).is_err());
    }
}
