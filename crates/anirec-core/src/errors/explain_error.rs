/// Explanation collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("explainer unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("explanation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("empty explanation from {provider}")]
    EmptyResponse { provider: String },
}
