mod catalog;
mod degradation_event;
mod index_stats;
mod item;
mod recommendation;

pub use catalog::Catalog;
pub use degradation_event::DegradationEvent;
pub use index_stats::IndexStats;
pub use item::Item;
pub use recommendation::{Recommendation, RecommendationSet};
