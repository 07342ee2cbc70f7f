//! Error types for the Extractor

use precedent_domain::OpinionId;
use thiserror::Error;

/// Errors that can occur while processing one citing opinion
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The opinion has no stored text (or does not exist)
    #[error("No content stored for opinion {0}")]
    MissingContent(OpinionId),

    /// Citation detection or resolution failed
    #[error("Detection error: {0}")]
    Detection(String),

    /// Querying stored opinions failed
    #[error("Matching error: {0}")]
    Matching(String),

    /// The caching tokenizer was misused
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    /// Text exceeds maximum length
    #[error("Text too long: {0} bytes (max: {1})")]
    TextTooLong(usize, usize),

    /// Processing exceeded the per-opinion time budget
    #[error("Extraction timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the caching tokenizer
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenizerError {
    /// The tokenizer is bound to a different document
    #[error("Tokenizer already bound to a different document ({bound_len} bytes, got {given_len} bytes)")]
    DocumentMismatch {
        /// Length of the bound document
        bound_len: usize,
        /// Length of the rejected document
        given_len: usize,
    },
}

/// Errors raised by the default citation detector
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DetectionError {
    /// A citation token index points outside the token stream
    #[error("Citation token {index} out of range for {len} tokens")]
    TokenOutOfRange {
        /// Offending index
        index: usize,
        /// Number of tokens
        len: usize,
    },

    /// A citation token does not parse as a citation
    #[error("Unrecognised citation token: {0}")]
    Unrecognised(String),
}
