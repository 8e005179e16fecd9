/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("missing column '{column}' (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("malformed row at line {line}: {message}")]
    Parse { line: u64, message: String },
}
