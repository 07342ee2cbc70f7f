//! Precedent Domain Layer
//!
//! This crate contains the domain model for citation context extraction.
//! It has ZERO external dependencies and defines the records, value objects,
//! and trait interfaces that the storage, extraction and batch layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Opinion**: A stored judicial opinion with raw text, owned by a cluster
//! - **Cluster**: Groups opinions sharing one canonical reporter string
//! - **Mention**: One syntactic citation occurrence, anchored to a token index
//! - **Resolved citation**: All mentions that refer to the same cited resource
//! - **Relationships**: Parentheticals and context windows from a citing to a cited opinion
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and formatting rules only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for every external collaborator (storage, segmentation,
//!   detection, resolution, markup extraction)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod opinion;
pub mod relationship;
pub mod reporter;
pub mod segmentation;
pub mod traits;

// Re-exports for convenience
pub use citation::{
    CitationMention, CitedResource, MentionKind, MentionMetadata, ReporterGroups,
    ResolvedCitation,
};
pub use opinion::{Cluster, ClusterId, Opinion, OpinionId};
pub use relationship::{CitationContext, OpinionParenthetical};
pub use reporter::ReporterKey;
pub use segmentation::{Segmentation, Token};
