/// Errors raised at the recommendation boundary.
///
/// The ranking itself never fails; these cover caller contract violations
/// and provider failures.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("invalid top_n {top_n}: must be between 1 and {max}")]
    InvalidTopN { top_n: usize, max: usize },

    #[error("unknown title: {title}")]
    UnknownTitle { title: String },

    #[error("similarity matrix shape mismatch: expected {expected}x{expected}, got {rows}x{cols}")]
    MatrixShapeMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("similarity matrix has a non-finite value at ({row}, {col})")]
    NonFiniteSimilarity { row: usize, col: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
