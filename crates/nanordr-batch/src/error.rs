//! Error types for batch runs

use thiserror::Error;

/// Errors that abort a whole batch
///
/// Faults raised while evaluating a single case never surface here; the runner
/// records them on the item and carries on.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A prediction record could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid batch configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed configuration file
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;
