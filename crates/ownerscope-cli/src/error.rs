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

    /// Finder pipeline error
    #[error(transparent)]
    Finder(#[from] ownerscope_extractor::FinderError),

    /// Report persistence error
    #[error("Store error: {0}")]
    Store(#[from] ownerscope_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No credential available
    #[error("An API key is required. Pass --api-key or set PERPLEXITY_API_KEY.")]
    MissingApiKey,

    /// Input file contained no URLs
    #[error("No URLs found in file '{0}'")]
    EmptyInputFile(String),
}
