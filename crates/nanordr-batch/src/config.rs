//! Configuration for batch runs

use crate::{BatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Number of cases the quick preset evaluates
pub const QUICK_LIMIT: usize = 128;

/// Which evaluator the runner applies to each case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// One conclusion per case
    #[default]
    Single,
    /// Every conclusion along the matching paths
    All,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Single => f.write_str("single"),
            EvaluationMode::All => f.write_str("all"),
        }
    }
}

/// Configuration for a batch run
///
/// # Examples
///
/// ```
/// use nanordr_batch::{BatchConfig, EvaluationMode};
///
/// // Every case, one conclusion each
/// let config = BatchConfig::default();
/// assert_eq!(config.limit, None);
/// assert_eq!(config.mode, EvaluationMode::Single);
///
/// // First 128 cases, all conclusions
/// let config = BatchConfig::quick();
/// assert_eq!(config.limit, Some(128));
/// assert_eq!(config.mode, EvaluationMode::All);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Evaluate at most this many cases (non-blank lines)
    /// Default: no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Evaluator to apply
    /// Default: single
    #[serde(default)]
    pub mode: EvaluationMode,

    /// Drop malformed lines instead of writing a failed record for them
    /// Default: false
    #[serde(default)]
    pub skip_invalid_lines: bool,
}

impl BatchConfig {
    /// Exploratory run over the head of a file, collecting every conclusion
    pub fn quick() -> Self {
        Self {
            limit: Some(QUICK_LIMIT),
            mode: EvaluationMode::All,
            skip_invalid_lines: false,
        }
    }

    /// Builder-style limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder-style mode
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that the configuration can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(BatchError::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BatchError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.limit, None);
        assert_eq!(config.mode, EvaluationMode::Single);
        assert!(!config.skip_invalid_lines);
    }

    #[test]
    fn test_quick_config() {
        let config = BatchConfig::quick();
        assert_eq!(config.limit, Some(QUICK_LIMIT));
        assert_eq!(config.mode, EvaluationMode::All);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BatchConfig::quick();
        let serialized = config.to_toml_string().unwrap();
        let deserialized = BatchConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BatchConfig::from_toml_str("mode = \"all\"\n").unwrap();
        assert_eq!(config.mode, EvaluationMode::All);
        assert_eq!(config.limit, None);
        assert!(!config.skip_invalid_lines);

        assert_eq!(BatchConfig::from_toml_str("").unwrap(), BatchConfig::default());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = BatchConfig::from_toml_str("limit = 0\n").unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = BatchConfig::from_toml_str("mode = \"every\"\n").unwrap_err();
        assert!(matches!(err, BatchError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.toml");
        std::fs::write(&path, "limit = 10\nskip_invalid_lines = true\n").unwrap();

        let config = BatchConfig::load(&path).unwrap();
        assert_eq!(config.limit, Some(10));
        assert!(config.skip_invalid_lines);
    }
}
