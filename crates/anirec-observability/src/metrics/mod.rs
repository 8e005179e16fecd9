//! In-process metrics.

mod recommendation_metrics;

pub use recommendation_metrics::RecommendationMetrics;
