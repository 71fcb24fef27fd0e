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

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Batch run error
    #[error("Batch error: {0}")]
    Batch(#[from] nanordr_batch::BatchError),

    /// Rule tree assembly error
    #[error("Rule tree error: {0}")]
    Build(#[from] nanordr_engine::BuildError),

    /// A rule faulted while evaluating a case
    #[error("Rule fault: {0}")]
    Rule(#[from] nanordr_domain::RuleFault),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
