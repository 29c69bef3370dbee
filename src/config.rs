//! Journal configuration
//!
//! Loaded from YAML; any field left out takes its default.
//!
//! ```yaml
//! min_label_len: 2
//! max_label_len: 128
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Label naming rules for a journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Minimum label name length, in characters, after normalization
    pub min_label_len: usize,
    /// Maximum label name length, in characters
    pub max_label_len: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            min_label_len: 2,
            max_label_len: 128,
        }
    }
}

impl JournalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_len(mut self, min: usize, max: usize) -> Self {
        self.min_label_len = min;
        self.max_label_len = max;
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_label_len == 0 {
            return Err(ConfigError::Invalid(
                "min_label_len must be at least 1".to_string(),
            ));
        }
        if self.min_label_len > self.max_label_len {
            return Err(ConfigError::Invalid(format!(
                "min_label_len ({}) exceeds max_label_len ({})",
                self.min_label_len, self.max_label_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = JournalConfig::default();
        assert_eq!(config.min_label_len, 2);
        assert_eq!(config.max_label_len, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = JournalConfig::from_yaml_str("max_label_len: 32\n").unwrap();
        assert_eq!(config.min_label_len, 2);
        assert_eq!(config.max_label_len, 32);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = JournalConfig::from_yaml_str("min_label_len: 10\nmax_label_len: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_minimum() {
        assert!(JournalConfig::new().with_label_len(0, 5).validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.yaml");
        std::fs::write(&path, "min_label_len: 3\n").unwrap();

        let config = JournalConfig::from_path(&path).unwrap();
        assert_eq!(config.min_label_len, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JournalConfig::from_path("/nonexistent/journal.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
