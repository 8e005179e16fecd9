mod explainer;
mod recommendation_provider;

pub use explainer::IExplainer;
pub use recommendation_provider::IRecommendationProvider;
