//! Configuration for batch runs
//!
//! Selects which opinions a run visits and whether results are committed.

use serde::{Deserialize, Serialize};

/// Configuration for the BatchDriver
///
/// # Examples
///
/// ```
/// use precedent_batch::BatchConfig;
///
/// // Default: every opinion, results committed
/// let config = BatchConfig::default();
/// assert!(!config.dry_run);
/// assert!(config.limit.is_none());
///
/// // Resume after opinion 500, at most 100 opinions, nothing written
/// let config = BatchConfig {
///     dry_run: true,
///     limit: Some(100),
///     start_after: Some(500),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Dry-run mode: run the full pipeline but never commit
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Maximum number of opinions to process
    /// Default: no limit
    #[serde(default)]
    pub limit: Option<usize>,

    /// Only process opinions whose id is greater than this
    /// Default: start from the first opinion
    #[serde(default)]
    pub start_after: Option<i64>,
}

impl BatchConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == Some(0) {
            return Err("limit must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert!(!config.dry_run);
        assert!(config.limit.is_none());
        assert!(config.start_after.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let config = BatchConfig {
            limit: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(BatchConfig::from_toml("").unwrap(), BatchConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BatchConfig {
            dry_run: true,
            limit: Some(25),
            start_after: Some(1_000),
        };
        let serialized = config.to_toml().unwrap();
        assert_eq!(BatchConfig::from_toml(&serialized).unwrap(), config);
    }
}
