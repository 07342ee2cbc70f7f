//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction pipeline and its
//! collaborators. Implementations live in other crates.

use crate::{
    CitationContext, CitationMention, Cluster, ClusterId, Opinion, OpinionId,
    OpinionParenthetical, ReporterKey, ResolvedCitation, Segmentation,
};

/// Trait for reading opinions and persisting citation relationships
///
/// Implemented by the infrastructure layer (precedent-store)
pub trait OpinionStore {
    /// Error type for store operations
    type Error;

    /// Identifiers of every stored opinion, ascending
    fn opinion_ids(&self) -> Result<Vec<OpinionId>, Self::Error>;

    /// Get an opinion by ID
    fn get_opinion(&self, id: OpinionId) -> Result<Option<Opinion>, Self::Error>;

    /// Get a cluster by ID
    fn get_cluster(&self, id: ClusterId) -> Result<Option<Cluster>, Self::Error>;

    /// Opinions whose cluster reporter equals one of `keys`
    fn find_opinions_by_reporters(&self, keys: &[ReporterKey]) -> Result<Vec<Opinion>, Self::Error>;

    /// Durably write the relationship records appended to `cited` by one run
    /// of `citing`, replacing anything previously written for `citing`
    ///
    /// Either every record is written or none is.
    fn commit_relationships(&mut self, citing: OpinionId, cited: &[Opinion]) -> Result<(), Self::Error>;

    /// Parentheticals written for a citing opinion
    fn parentheticals_from(&self, citing: OpinionId) -> Result<Vec<OpinionParenthetical>, Self::Error>;

    /// Contexts written for a citing opinion
    fn contexts_from(&self, citing: OpinionId) -> Result<Vec<CitationContext>, Self::Error>;

    /// Weighted `(citing, cited, weight)` edges, weight = number of stored contexts
    fn citation_edges(&self) -> Result<Vec<(OpinionId, OpinionId, u32)>, Self::Error>;
}

/// Trait for the one-shot segmentation pass
///
/// Implemented by the application layer (precedent-extractor)
pub trait Segmenter {
    /// Split `text` into tokens and mark the citation tokens
    fn segment(&self, text: &str) -> Segmentation;
}

/// Trait for finding citation mentions in a segmented document
pub trait CitationDetector {
    /// Error type for detection
    type Error;

    /// Produce mentions in document order, indexed into `segmentation`
    fn detect(&self, text: &str, segmentation: &Segmentation) -> Result<Vec<CitationMention>, Self::Error>;
}

/// Trait for grouping mentions that refer to the same resource
pub trait CitationResolver {
    /// Error type for resolution
    type Error;

    /// Group mentions by cited resource, in order of first appearance
    fn resolve(&self, mentions: Vec<CitationMention>) -> Result<Vec<ResolvedCitation>, Self::Error>;
}

/// Trait for flattening stored markup to plain text
pub trait TextExtractor {
    /// Extract the visible text of `markup`
    fn extract_text(&self, markup: &str) -> String;
}
