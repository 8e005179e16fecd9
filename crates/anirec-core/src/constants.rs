/// anirec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name used in degradation events raised by the provider chain.
pub const RECOMMEND_COMPONENT: &str = "recommend";

/// Component name used in degradation events raised when a pitch falls back.
pub const EXPLAIN_COMPONENT: &str = "explain";

/// Maximum number of favorites forwarded to an explanation prompt.
pub const MAX_PROMPT_FAVORITES: usize = 3;

/// Maximum number of description characters forwarded to an explanation prompt.
pub const MAX_PROMPT_DESCRIPTION_CHARS: usize = 300;

/// Length of the description excerpt used when no pitch can be generated.
pub const PITCH_FALLBACK_CHARS: usize = 150;
