//! Precedent Extractor
//!
//! Finds the citations one opinion makes to others and turns each into
//! relationship records.
//!
//! # Overview
//!
//! For a single citing opinion the extractor loads the stored text, flattens
//! and normalizes it, segments it exactly once, detects and resolves citation
//! mentions, and matches the resolved citations against stored opinions by
//! their canonical reporter key. Every surviving mention yields a context
//! window; case citations with a substantive parenthetical also yield an
//! [`OpinionParenthetical`](precedent_domain::OpinionParenthetical).
//!
//! # Architecture
//!
//! ```text
//! stored HTML → text → normalize → tokenize once → detect → resolve
//!     → reporter keys → stored opinions → parentheticals + contexts
//! ```
//!
//! The segmenter, detector, resolver and markup extractor sit behind the
//! traits in `precedent_domain::traits`. The defaults here recognise a table
//! of reporter abbreviations.
//!
//! # Example Usage
//!
//! ```no_run
//! use precedent_domain::OpinionId;
//! use precedent_extractor::{ContextExtractor, ExtractorConfig};
//! use precedent_store::SqliteStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("opinions.db")?;
//! let extractor = ContextExtractor::new(ExtractorConfig::default())?;
//!
//! let result = extractor.extract(&store, OpinionId::new(42))?;
//! println!("Matched {} cited opinions", result.cited.len());
//! println!("Contexts: {}", result.context_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod extractor;
mod grammar;
mod html;
mod normalizer;
mod parenthetical;
mod resolver;
mod segmenter;
mod tokenizer;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use detector::ReporterCitationDetector;
pub use error::{DetectionError, ExtractorError, TokenizerError};
pub use extractor::ContextExtractor;
pub use grammar::{CitationGrammar, ParsedCitation, DEFAULT_REPORTERS};
pub use html::HtmlTextExtractor;
pub use normalizer::TextNormalizer;
pub use parenthetical::ParentheticalFilter;
pub use resolver::ReporterResolver;
pub use segmenter::ReporterSegmenter;
pub use tokenizer::CachingTokenizer;
pub use types::{ExtractionMetadata, ExtractionResult};
pub use window::ContextWindow;
