//! Error types for batch runs

use thiserror::Error;

/// Errors that stop a batch run as a whole
///
/// Failures of individual opinions are never surfaced here; they are logged
/// and recorded in [`BatchMetrics`](crate::BatchMetrics).
#[derive(Error, Debug)]
pub enum BatchError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
