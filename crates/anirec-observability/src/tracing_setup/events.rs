//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A similarity index was (re)built.
pub fn index_rebuilt(items: usize, previous_hash: &str, hash: &str) {
    tracing::info!(
        event = "index_rebuilt",
        items = items,
        previous_hash = %previous_hash,
        hash = %hash,
        "similarity index rebuilt"
    );
}

/// A recommendation request was answered.
pub fn recommendation_served(favorites: usize, results: usize, provider: &str) {
    tracing::info!(
        event = "recommendation_served",
        favorites = favorites,
        results = results,
        provider = %provider,
        "recommendations served"
    );
}

/// Favorites that matched no title.
pub fn unknown_favorites(titles: &[String]) {
    tracing::warn!(
        event = "unknown_favorites",
        titles = ?titles,
        "favorite titles not found in catalog"
    );
}

/// A provider failed and a fallback took over.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// An explanation could not be produced; the recommendation is kept.
pub fn explanation_failed(title: &str, explainer: &str, reason: &str) {
    tracing::warn!(
        event = "explanation_failed",
        title = %title,
        explainer = %explainer,
        reason = %reason,
        "explanation omitted"
    );
}
