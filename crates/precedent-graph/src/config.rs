//! Configuration for the citation network

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for building and caching the citation network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Where the cached export lives
    /// Default: `precedent-network.json`
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Keep edge direction (citing → cited)
    /// Default: false
    #[serde(default)]
    pub directed: bool,

    /// Read and write the cache file
    /// Default: true
    #[serde(default = "default_enable_caching")]
    pub enable_caching: bool,
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("precedent-network.json")
}

fn default_enable_caching() -> bool {
    true
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            directed: false,
            enable_caching: default_enable_caching(),
        }
    }
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enable_caching && self.cache_path.as_os_str().is_empty() {
            return Err("cache_path must be set when caching is enabled".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert!(config.enable_caching);
        assert_eq!(config.cache_path, PathBuf::from("precedent-network.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_cache_path() {
        let mut config = GraphConfig {
            cache_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.enable_caching = false;
        assert!(config.validate().is_ok());
    }
}
