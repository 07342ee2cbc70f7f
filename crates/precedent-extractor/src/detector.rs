//! Default citation detector over reporter citation tokens

use crate::error::DetectionError;
use crate::grammar::CitationGrammar;
use precedent_domain::traits::CitationDetector;
use precedent_domain::{CitationMention, MentionKind, MentionMetadata, Segmentation};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static PIN_CITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^,\s*(?:at\s+)?(\d+(?:\s*[-–]\s*\d+)?(?:,\s*\d+(?:\s*[-–]\s*\d+)?)*)")
        .expect("valid pin cite regex")
});

// A pin followed by a capitalised word is the volume of a parallel citation
static PARALLEL_AFTER_PIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+[A-Z]").expect("valid parallel citation regex"));

// Text between the citations of a parallel chain, with an optional pin cite
static PARALLEL_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*,\s*(?:(?:at\s+)?(\d+(?:\s*[-–]\s*\d+)?(?:\s*,\s*\d+(?:\s*[-–]\s*\d+)?)*)\s*,\s*)?$")
        .expect("valid parallel gap regex")
});

static YEAR_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(([^()]*?\b(\d{4}))\)").expect("valid year parenthetical regex")
});

/// Detects one mention per citation token of a [`Segmentation`]
#[derive(Debug, Clone)]
pub struct ReporterCitationDetector {
    grammar: Arc<CitationGrammar>,
}

impl ReporterCitationDetector {
    /// Create a detector over a shared grammar
    pub fn new(grammar: Arc<CitationGrammar>) -> Self {
        Self { grammar }
    }
}

impl Default for ReporterCitationDetector {
    fn default() -> Self {
        Self::new(Arc::new(CitationGrammar::default()))
    }
}

impl CitationDetector for ReporterCitationDetector {
    type Error = DetectionError;

    fn detect(
        &self,
        text: &str,
        segmentation: &Segmentation,
    ) -> Result<Vec<CitationMention>, Self::Error> {
        let mut mentions = Vec::with_capacity(segmentation.citation_tokens.len());
        let mut ends = Vec::with_capacity(segmentation.citation_tokens.len());

        for &index in &segmentation.citation_tokens {
            let out_of_range = || DetectionError::TokenOutOfRange {
                index,
                len: segmentation.len(),
            };
            let token = segmentation.tokens.get(index).ok_or_else(out_of_range)?;
            let end = token.span.start + token.text_len;
            let token_text = text.get(token.span.start..end).ok_or_else(out_of_range)?;

            let parsed = self
                .grammar
                .parse(token_text)
                .ok_or_else(|| DetectionError::Unrecognised(token_text.to_string()))?;

            let mut mention = CitationMention::new(parsed.kind, index, parsed.groups);
            mention.metadata = trailing_metadata(&text[end..]);
            mentions.push(mention);
            ends.push(end);
        }

        link_parallel_citations(text, segmentation, &mut mentions, &ends);
        Ok(mentions)
    }
}

/// Share the year and parenthetical of a parallel chain with every member
///
/// In `410 U.S. 113, 93 S. Ct. 705 (1973) (...)` only the last citation is
/// followed by the year and parenthetical. Walking backwards lets chains of
/// any length inherit them.
fn link_parallel_citations(
    text: &str,
    segmentation: &Segmentation,
    mentions: &mut [CitationMention],
    ends: &[usize],
) {
    for i in (0..mentions.len().saturating_sub(1)).rev() {
        let (head, tail) = mentions.split_at_mut(i + 1);
        let (current, next) = (&mut head[i], &tail[0]);

        if current.kind != MentionKind::FullCase
            || next.kind != MentionKind::FullCase
            || current.groups == next.groups
            || current.metadata.year.is_some()
            || current.metadata.parenthetical.is_some()
        {
            continue;
        }

        let Some(gap) = segmentation
            .tokens
            .get(next.index)
            .and_then(|token| text.get(ends[i]..token.span.start))
        else {
            continue;
        };
        let Some(caps) = PARALLEL_GAP.captures(gap) else {
            continue;
        };

        if current.metadata.pin_cite.is_none() {
            current.metadata.pin_cite = caps.get(1).map(|m| m.as_str().to_string());
        }
        current.metadata.year = next.metadata.year.clone();
        current.metadata.parenthetical = next.metadata.parenthetical.clone();
    }
}

/// Pin cite, year and parenthetical from the text right after a citation
fn trailing_metadata(rest: &str) -> MentionMetadata {
    let mut metadata = MentionMetadata::default();
    let mut rest = rest;

    if let Some(caps) = PIN_CITE.captures(rest) {
        let whole = caps.get(0).map_or(0, |m| m.end());
        if !PARALLEL_AFTER_PIN.is_match(&rest[whole..]) {
            metadata.pin_cite = caps.get(1).map(|m| m.as_str().to_string());
            rest = &rest[whole..];
        }
    }

    if let Some(caps) = YEAR_PAREN.captures(rest) {
        metadata.year = caps.get(2).map(|m| m.as_str().to_string());
        rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
    }

    metadata.parenthetical = balanced_parenthetical(rest);
    metadata
}

/// Contents of a balanced `( ... )` group at the start of `rest`, trimmed
fn balanced_parenthetical(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    if !rest.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let inner = rest[1..offset].trim();
                    return (!inner.is_empty()).then(|| inner.to_string());
                }
            }
            _ => {}
        }
    }
    None
}
