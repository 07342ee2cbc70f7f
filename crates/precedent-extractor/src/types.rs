//! Result types for one extraction run

use precedent_domain::{Opinion, OpinionId};

/// Result of processing one citing opinion
///
/// Nothing here has been persisted; committing `cited` is the caller's job.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Matched cited opinions, each carrying the relationships appended during this run
    pub cited: Vec<Opinion>,

    /// Counts gathered along the way
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// Total parentheticals appended across all cited opinions
    pub fn parenthetical_count(&self) -> usize {
        self.cited.iter().map(|o| o.parentheticals.len()).sum()
    }

    /// Total contexts appended across all cited opinions
    pub fn context_count(&self) -> usize {
        self.cited.iter().map(|o| o.contexts.len()).sum()
    }
}

/// Metadata about an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionMetadata {
    /// The citing opinion
    pub citing: i64,

    /// Mentions produced by the detector
    pub mentions_detected: usize,

    /// Resolved citations with a non-empty reporter key
    pub resources_resolved: usize,

    /// Stored opinions matched by reporter key
    pub opinions_matched: usize,

    /// Parentheticals that passed the filter
    pub parentheticals: usize,

    /// Context windows extracted
    pub contexts: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ExtractionMetadata {
    /// Empty metadata for `citing`
    pub fn new(citing: OpinionId) -> Self {
        Self {
            citing: citing.value(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_domain::{CitationContext, OpinionParenthetical};

    #[test]
    fn test_counts_sum_over_cited_opinions() {
        let citing = OpinionId::new(1);
        let mut first = Opinion::new(OpinionId::new(2), None, None, None);
        first
            .parentheticals
            .push(OpinionParenthetical::new(citing, first.id, "holding X".into()));
        first
            .contexts
            .push(CitationContext::new(citing, first.id, "a".into()));
        let mut second = Opinion::new(OpinionId::new(3), None, None, None);
        for text in ["b", "c"] {
            second
                .contexts
                .push(CitationContext::new(citing, second.id, text.into()));
        }

        let result = ExtractionResult {
            cited: vec![first, second],
            metadata: ExtractionMetadata::new(citing),
        };

        assert_eq!(result.parenthetical_count(), 1);
        assert_eq!(result.context_count(), 3);
        assert_eq!(result.metadata.citing, 1);
        assert_eq!(result.metadata.contexts, 0);
    }
}
