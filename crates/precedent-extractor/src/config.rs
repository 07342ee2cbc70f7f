//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
///
/// Fields missing from a TOML document take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Window start, in tokens relative to the citation token (usually negative)
    pub window_start: i64,

    /// Window end (exclusive), in tokens relative to the citation token
    pub window_end: i64,

    /// Maximum stored text length (bytes)
    pub max_text_length: usize,

    /// Maximum time spent on one opinion (seconds)
    pub per_opinion_timeout_secs: u64,

    /// Reporter abbreviations recognised in addition to the built-in table
    pub extra_reporters: Vec<String>,
}

impl ExtractorConfig {
    /// Get the per-opinion timeout as a Duration
    pub fn per_opinion_timeout(&self) -> Duration {
        Duration::from_secs(self.per_opinion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_start > self.window_end {
            return Err(format!(
                "window_start ({}) cannot exceed window_end ({})",
                self.window_start, self.window_end
            ));
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.per_opinion_timeout_secs == 0 {
            return Err("per_opinion_timeout_secs must be greater than 0".to_string());
        }
        if let Some(blank) = self.extra_reporters.iter().find(|r| r.trim().is_empty()) {
            return Err(format!("extra_reporters contains a blank entry: {:?}", blank));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// 128 tokens either side of the citation
    fn default() -> Self {
        Self {
            window_start: -128,
            window_end: 128,
            max_text_length: 5_000_000,
            per_opinion_timeout_secs: 300,
            extra_reporters: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Narrow preset: 32 tokens either side
    pub fn narrow() -> Self {
        Self {
            window_start: -32,
            window_end: 32,
            ..Self::default()
        }
    }

    /// Wide preset: 512 tokens either side, longer time budget
    pub fn wide() -> Self {
        Self {
            window_start: -512,
            window_end: 512,
            per_opinion_timeout_secs: 600,
            ..Self::default()
        }
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
