//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record store error
    #[error("Store error: {0}")]
    Store(#[from] lexboard_store::StoreError),

    /// Session controller error
    #[error("{0}")]
    Session(#[from] lexboard_session::SessionError),

    /// Judgment analysis error, displayed as its user-facing message
    #[error("{}", .0.user_message())]
    Analysis(#[from] lexboard_extractor::ExtractorError),

    /// Local cache error
    #[error("Cache error: {0}")]
    Cache(#[from] lexboard_history::CacheError),

    /// Submission validation error
    #[error("Invalid submission: {0}")]
    Validation(#[from] lexboard_domain::ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
