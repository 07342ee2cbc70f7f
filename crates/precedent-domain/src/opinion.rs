//! Opinion and cluster records
//!
//! Opinions and clusters pre-exist in storage. The extraction pipeline only
//! reads them and appends relationship records to in-memory opinions.

use std::fmt;

use crate::relationship::{CitationContext, OpinionParenthetical};

/// Identifier of a stored opinion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpinionId(i64);

impl OpinionId {
    /// Wrap a raw storage identifier
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for OpinionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OpinionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a stored cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterId(i64);

impl ClusterId {
    /// Wrap a raw storage identifier
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group of opinions published under one canonical reporter string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Storage identifier
    pub id: ClusterId,

    /// Canonical reporter string, the matching key for citations
    pub reporter: String,
}

/// A stored opinion
///
/// `parentheticals` and `contexts` accumulate records appended during one
/// extraction run. They are not loaded from storage; a freshly read opinion
/// always starts with both collections empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Opinion {
    /// Storage identifier
    pub id: OpinionId,

    /// Raw (usually HTML) text, absent for opinions that were never fetched
    pub html_text: Option<String>,

    /// Owning cluster, if any
    pub cluster_id: Option<ClusterId>,

    /// Reporter string of the owning cluster
    pub reporter: Option<String>,

    /// Parentheticals appended during the current run
    pub parentheticals: Vec<OpinionParenthetical>,

    /// Citation contexts appended during the current run
    pub contexts: Vec<CitationContext>,
}

impl Opinion {
    /// Create an opinion with empty relationship collections
    pub fn new(
        id: OpinionId,
        html_text: Option<String>,
        cluster_id: Option<ClusterId>,
        reporter: Option<String>,
    ) -> Self {
        Self {
            id,
            html_text,
            cluster_id,
            reporter,
            parentheticals: Vec::new(),
            contexts: Vec::new(),
        }
    }

    /// Whether the opinion has any non-whitespace stored text
    pub fn has_content(&self) -> bool {
        self.html_text
            .as_deref()
            .map_or(false, |text| !text.trim().is_empty())
    }

    /// Total number of relationship records appended so far
    pub fn relationship_count(&self) -> usize {
        self.parentheticals.len() + self.contexts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_opinion_has_empty_collections() {
        let opinion = Opinion::new(OpinionId::new(7), Some("<p>text</p>".into()), None, None);
        assert!(opinion.parentheticals.is_empty());
        assert!(opinion.contexts.is_empty());
        assert_eq!(opinion.relationship_count(), 0);
    }

    #[test]
    fn test_has_content() {
        let with_text = Opinion::new(OpinionId::new(1), Some("text".into()), None, None);
        let blank = Opinion::new(OpinionId::new(2), Some("   \n".into()), None, None);
        let absent = Opinion::new(OpinionId::new(3), None, None, None);

        assert!(with_text.has_content());
        assert!(!blank.has_content());
        assert!(!absent.has_content());
    }

    #[test]
    fn test_opinion_id_display() {
        assert_eq!(OpinionId::from(42).to_string(), "42");
    }
}
