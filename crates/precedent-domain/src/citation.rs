//! Citation mentions and their resolution
//!
//! Mentions and resolved citations are ephemeral: they live only for the
//! duration of one opinion's extraction run.

use crate::ReporterKey;

/// Syntactic form of a citation mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    /// `410 U.S. 113`
    FullCase,

    /// `410 U.S., at 120`
    ShortCase,

    /// `Id.`
    Id,
}

impl MentionKind {
    /// Whether this mention is a case citation (the only kind whose
    /// parenthetical is considered for recording)
    pub fn is_case_citation(&self) -> bool {
        matches!(self, MentionKind::FullCase | MentionKind::ShortCase)
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionKind::FullCase => "full_case",
            MentionKind::ShortCase => "short_case",
            MentionKind::Id => "id",
        }
    }
}

/// Volume, reporter and page groups captured for a mention
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReporterGroups {
    /// Reporter volume
    pub volume: Option<String>,

    /// Reporter abbreviation
    pub reporter: Option<String>,

    /// First page (for short forms, the pin page)
    pub page: Option<String>,
}

impl ReporterGroups {
    /// Create groups with all three components present
    pub fn new(
        volume: impl Into<String>,
        reporter: impl Into<String>,
        page: impl Into<String>,
    ) -> Self {
        Self {
            volume: Some(volume.into()),
            reporter: Some(reporter.into()),
            page: Some(page.into()),
        }
    }

    /// Build the canonical reporter key for these groups
    pub fn key(&self) -> ReporterKey {
        ReporterKey::build(
            self.volume.as_deref(),
            self.reporter.as_deref(),
            self.page.as_deref(),
        )
    }
}

/// Optional metadata attached to a mention
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionMetadata {
    /// Parenthetical text following the citation, without the enclosing parens
    pub parenthetical: Option<String>,

    /// Pin cite (`, 120`)
    pub pin_cite: Option<String>,

    /// Year from the trailing date parenthetical
    pub year: Option<String>,
}

/// One syntactic citation occurrence in a citing opinion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationMention {
    /// Form of the citation
    pub kind: MentionKind,

    /// Index of the citation token in the citing opinion's segmentation
    pub index: usize,

    /// Volume/reporter/page groups, absent for `Id.`
    pub groups: ReporterGroups,

    /// Parenthetical, pin cite and year
    pub metadata: MentionMetadata,
}

impl CitationMention {
    /// Create a mention without metadata
    pub fn new(kind: MentionKind, index: usize, groups: ReporterGroups) -> Self {
        Self {
            kind,
            index,
            groups,
            metadata: MentionMetadata::default(),
        }
    }

    /// Attach a parenthetical
    pub fn with_parenthetical(mut self, parenthetical: impl Into<String>) -> Self {
        self.metadata.parenthetical = Some(parenthetical.into());
        self
    }
}

/// The resource a group of mentions resolved to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitedResource {
    /// Groups of the full citation that established the resource
    pub groups: ReporterGroups,
}

impl CitedResource {
    /// Canonical key used to match stored clusters
    pub fn key(&self) -> ReporterKey {
        self.groups.key()
    }
}

/// All raw mentions referring to one cited resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCitation {
    /// The resource
    pub resource: CitedResource,

    /// Every mention resolved to it, in document order
    pub mentions: Vec<CitationMention>,
}
