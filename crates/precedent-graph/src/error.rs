//! Error types for the citation network

use thiserror::Error;

/// Errors that can occur while building, saving or loading a network
#[derive(Error, Debug)]
pub enum GraphError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Reading or writing an export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An export could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The export was written by an incompatible version
    #[error("Unsupported export format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Version this build reads and writes
        expected: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
