use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Project is already initialized
    #[error("{0} already exists")]
    AlreadyInitialized(String),

    /// Configuration problem
    #[error("Config error: {0}")]
    Config(String),

    /// Migration writer problem
    #[error("Migration error: {0}")]
    Migration(String),

    /// Filesystem problem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
