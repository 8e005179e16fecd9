// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "Anime.csv";
pub const DEFAULT_TITLE_COLUMN: &str = "Title";
pub const DEFAULT_DESCRIPTION_COLUMN: &str = "Synopsis";
pub const DEFAULT_GENRE_COLUMN: &str = "Genre";

// --- Vectorizer ---
pub const DEFAULT_LOWERCASE: bool = true;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;
pub const DEFAULT_SMOOTH_IDF: bool = true;
pub const DEFAULT_SUBLINEAR_TF: bool = false;

// --- Recommend ---
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MAX_TOP_N: usize = 100;
pub const DEFAULT_SEARCH_TOP_K: usize = 10;

// --- Explain ---
pub const DEFAULT_EXPLAIN_PROVIDER: &str = "none";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_LLM_MODEL: &str = "mistral";
pub const DEFAULT_EXPLAIN_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_NUM_PREDICT: u32 = 500;
pub const DEFAULT_EXPLAIN_CACHE_SIZE: u64 = 1_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
