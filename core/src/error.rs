use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrataError {
    /// Error preparing a statement
    #[error("Prepare error: {0}")]
    Prepare(String),

    /// Error executing a statement
    #[error("Execution error: {0}")]
    Execution(String),

    /// No rows returned when at least one was expected
    #[error("No rows found")]
    NotFound,

    /// Error mapping row data
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Generic error
    #[error("Database error: {0}")]
    Other(String),
}

/// Result type for executor-boundary operations
pub type Result<T> = std::result::Result<T, StrataError>;
