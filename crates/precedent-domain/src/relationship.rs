//! Relationship records between a citing and a cited opinion

use crate::OpinionId;

/// An explanatory parenthetical attached to a citation
///
/// Only substantive parentheticals are ever recorded, so `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionParenthetical {
    /// Opinion containing the citation
    pub citing_opinion_id: OpinionId,

    /// Opinion referenced by the citation
    pub cited_opinion_id: OpinionId,

    /// Parenthetical text as it appeared after the citation
    pub text: String,
}

impl OpinionParenthetical {
    /// Create a new parenthetical record
    pub fn new(citing_opinion_id: OpinionId, cited_opinion_id: OpinionId, text: String) -> Self {
        Self {
            citing_opinion_id,
            cited_opinion_id,
            text,
        }
    }
}

/// A rendered window of text surrounding one citation occurrence
///
/// One context exists per surviving mention; repeated citations to the same
/// opinion produce one record each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationContext {
    /// Opinion containing the citation
    pub citing_opinion_id: OpinionId,

    /// Opinion referenced by the citation
    pub cited_opinion_id: OpinionId,

    /// Window text, possibly empty for a degenerate window
    pub text: String,
}

impl CitationContext {
    /// Create a new context record
    pub fn new(citing_opinion_id: OpinionId, cited_opinion_id: OpinionId, text: String) -> Self {
        Self {
            citing_opinion_id,
            cited_opinion_id,
            text,
        }
    }
}
