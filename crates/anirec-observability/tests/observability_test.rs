use std::time::Duration;

use anirec_observability::tracing_setup::events;
use anirec_observability::RecommendationMetrics;

#[test]
fn query_counters() {
    let mut m = RecommendationMetrics::new();
    m.record_query("tfidf", 3, 0, Duration::from_micros(100));
    m.record_query("tfidf", 0, 2, Duration::from_micros(300));
    m.record_query("matrix", 5, 1, Duration::from_micros(200));

    assert_eq!(m.queries, 3);
    assert_eq!(m.empty_results, 1);
    assert_eq!(m.unknown_favorites, 3);
    assert_eq!(m.provider_usage["tfidf"], 2);
    assert_eq!(m.provider_usage["matrix"], 1);
    assert!((m.empty_result_rate() - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn latency_percentiles() {
    let mut m = RecommendationMetrics::new();
    assert_eq!(m.latency_percentile(0.5), Duration::ZERO);
    for us in [10, 20, 30, 40, 50] {
        m.record_query("tfidf", 1, 0, Duration::from_micros(us));
    }
    assert_eq!(m.latency_percentile(0.0), Duration::from_micros(10));
    assert_eq!(m.latency_percentile(0.5), Duration::from_micros(30));
    assert_eq!(m.latency_percentile(1.0), Duration::from_micros(50));
}

#[test]
fn fallback_explanation_rebuild_counters() {
    let mut m = RecommendationMetrics::new();
    m.record_fallback();
    m.record_explanation(true);
    m.record_explanation(false);
    m.record_explanation(false);
    m.record_rebuild();

    assert_eq!(m.fallbacks, 1);
    assert_eq!(m.explanations_generated, 1);
    assert_eq!(m.explanation_failures, 2);
    assert_eq!(m.index_rebuilds, 1);
}

#[test]
fn json_report_has_counters() {
    let mut m = RecommendationMetrics::new();
    m.record_query("tfidf", 0, 0, Duration::from_micros(5));
    let json = m.to_json();
    assert_eq!(json["queries"], 1);
    assert_eq!(json["empty_result_rate"], 1.0);
    assert_eq!(json["provider_usage"]["tfidf"], 1);
}

#[test]
fn serde_roundtrip_keeps_samples() {
    let mut m = RecommendationMetrics::new();
    m.record_query("tfidf", 1, 0, Duration::from_micros(42));
    let json = serde_json::to_string(&m).unwrap();
    let back: RecommendationMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
    assert_eq!(back.latency_percentile(0.5), Duration::from_micros(42));
}

#[test]
fn events_do_not_panic_without_subscriber() {
    events::index_rebuilt(3, "old", "new");
    events::recommendation_served(1, 2, "tfidf");
    events::unknown_favorites(&["Z".to_string()]);
    events::degradation_triggered("recommend", "boom", "tfidf");
    events::explanation_failed("B", "ollama", "timeout");
}
