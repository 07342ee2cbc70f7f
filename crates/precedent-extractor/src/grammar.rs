//! Reporter citation grammar shared by the default segmenter and detector
//!
//! Recognises three surface forms:
//! - full: `410 U.S. 113`
//! - short: `410 U.S., at 120`
//! - id: `Id.`
//!
//! Reporter abbreviations come from a table. Matching ignores whitespace
//! inside an abbreviation after a period (`F. 2d` and `F.2d` both match), and
//! the matched text is mapped back to the table's canonical spelling.

use precedent_domain::{MentionKind, ReporterGroups};
use regex::{Matches, Regex};
use std::collections::HashMap;

/// Reporters recognised out of the box
pub const DEFAULT_REPORTERS: &[&str] = &[
    "U.S.",
    "S. Ct.",
    "L. Ed.",
    "L. Ed. 2d",
    "F.",
    "F.2d",
    "F.3d",
    "F.4th",
    "F. Supp.",
    "F. Supp. 2d",
    "F. Supp. 3d",
    "A.",
    "A.2d",
    "A.3d",
    "P.",
    "P.2d",
    "P.3d",
    "N.E.",
    "N.E.2d",
    "N.E.3d",
    "N.W.",
    "N.W.2d",
    "S.E.",
    "S.E.2d",
    "S.W.",
    "S.W.2d",
    "S.W.3d",
    "So.",
    "So. 2d",
    "So. 3d",
    "Cal. Rptr.",
    "B.R.",
];

/// A citation token parsed back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    /// Surface form
    pub kind: MentionKind,

    /// Volume, canonical reporter and page (pin page for short forms)
    pub groups: ReporterGroups,
}

/// Compiled citation grammar for a reporter table
#[derive(Debug, Clone)]
pub struct CitationGrammar {
    pattern: Regex,
    canonical: HashMap<String, String>,
}

impl CitationGrammar {
    /// Compile a grammar for the given reporter abbreviations
    pub fn new<I, S>(reporters: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = HashMap::new();
        for reporter in reporters {
            let display = reporter.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
            if display.is_empty() {
                continue;
            }
            canonical.entry(compact(&display)).or_insert(display);
        }

        // Longest first so `F.2d` wins over `F.` at the same position
        let mut compacts: Vec<&String> = canonical.keys().collect();
        compacts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = compacts
            .iter()
            .map(|c| reporter_pattern(c))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(
            r"\b(?P<sv>\d{{1,4}})\s+(?P<sr>{alt}),?\s+at\s+(?P<sp>\d{{1,5}})\b|\b(?P<fv>\d{{1,4}})\s+(?P<fr>{alt})\s+(?P<fp>\d{{1,5}})\b|\b(?P<id>[Ii]d\.)",
            alt = alternation
        ))?;

        Ok(Self { pattern, canonical })
    }

    /// Grammar for [`DEFAULT_REPORTERS`] plus `extra`
    pub fn with_extra_reporters<S: AsRef<str>>(extra: &[S]) -> Result<Self, regex::Error> {
        Self::new(
            DEFAULT_REPORTERS
                .iter()
                .map(|r| r.to_string())
                .chain(extra.iter().map(|r| r.as_ref().to_string())),
        )
    }

    /// Every citation match in `text`, non-overlapping, left to right
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.pattern.find_iter(text)
    }

    /// Parse a whole citation token
    ///
    /// Returns `None` unless the grammar matches the entire token.
    pub fn parse(&self, token: &str) -> Option<ParsedCitation> {
        let caps = self.pattern.captures(token)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != token.len() {
            return None;
        }

        if caps.name("id").is_some() {
            return Some(ParsedCitation {
                kind: MentionKind::Id,
                groups: ReporterGroups::default(),
            });
        }

        let (kind, volume, reporter, page) = if let Some(volume) = caps.name("sv") {
            (MentionKind::ShortCase, volume, caps.name("sr")?, caps.name("sp")?)
        } else {
            (MentionKind::FullCase, caps.name("fv")?, caps.name("fr")?, caps.name("fp")?)
        };

        Some(ParsedCitation {
            kind,
            groups: ReporterGroups::new(
                volume.as_str(),
                self.canonical_reporter(reporter.as_str()),
                page.as_str(),
            ),
        })
    }

    /// Map a matched reporter spelling to its table entry
    pub fn canonical_reporter(&self, raw: &str) -> String {
        self.canonical
            .get(&compact(raw))
            .cloned()
            .unwrap_or_else(|| raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Number of distinct reporters in the table
    pub fn reporter_count(&self) -> usize {
        self.canonical.len()
    }
}

impl Default for CitationGrammar {
    fn default() -> Self {
        Self::new(DEFAULT_REPORTERS).expect("default reporter table compiles")
    }
}

fn compact(reporter: &str) -> String {
    reporter.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Escape a compact reporter, allowing optional whitespace after each interior period
fn reporter_pattern(compact: &str) -> String {
    let mut pattern = String::new();
    let mut chars = compact.chars().peekable();
    while let Some(c) = chars.next() {
        pattern.push_str(&regex::escape(&c.to_string()));
        if c == '.' && chars.peek().is_some() {
            pattern.push_str(r"\s*");
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(grammar: &CitationGrammar, text: &str) -> Vec<String> {
        grammar.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn test_default_table_compiles() {
        let grammar = CitationGrammar::default();
        assert_eq!(grammar.reporter_count(), DEFAULT_REPORTERS.len());
    }

    #[test]
    fn test_finds_full_short_and_id_forms() {
        let grammar = CitationGrammar::default();
        let found = matches(
            &grammar,
            "Roe v. Wade, 410 U.S. 113 (1973). Later, 410 U.S., at 120. Id. at 121.",
        );
        assert_eq!(found, vec!["410 U.S. 113", "410 U.S., at 120", "Id."]);
    }

    #[test]
    fn test_longest_reporter_wins() {
        let grammar = CitationGrammar::default();
        assert_eq!(matches(&grammar, "see 5 F.2d 9"), vec!["5 F.2d 9"]);
        assert_eq!(matches(&grammar, "see 5 F. Supp. 2d 9"), vec!["5 F. Supp. 2d 9"]);
        assert_eq!(matches(&grammar, "see 5 L. Ed. 2d 9"), vec!["5 L. Ed. 2d 9"]);
    }

    #[test]
    fn test_ignores_statutes_and_words() {
        let grammar = CitationGrammar::default();
        assert!(matches(&grammar, "42 U.S.C. 1983 was paid. Ibid.").is_empty());
    }

    #[test]
    fn test_parse_canonicalizes_reporter_spacing() {
        let grammar = CitationGrammar::default();
        let parsed = grammar.parse("5 F. 2d 9").unwrap();
        assert_eq!(parsed.kind, MentionKind::FullCase);
        assert_eq!(parsed.groups, ReporterGroups::new("5", "F.2d", "9"));

        let parsed = grammar.parse("347 S.Ct. 4").unwrap();
        assert_eq!(parsed.groups.reporter.as_deref(), Some("S. Ct."));
    }

    #[test]
    fn test_parse_short_form() {
        let grammar = CitationGrammar::default();
        let parsed = grammar.parse("410 U.S., at 120").unwrap();
        assert_eq!(parsed.kind, MentionKind::ShortCase);
        assert_eq!(parsed.groups, ReporterGroups::new("410", "U.S.", "120"));
    }

    #[test]
    fn test_parse_rejects_partial_tokens() {
        let grammar = CitationGrammar::default();
        assert!(grammar.parse("see 410 U.S. 113").is_none());
        assert!(grammar.parse("plain").is_none());
    }

    #[test]
    fn test_extra_reporters() {
        let grammar = CitationGrammar::with_extra_reporters(&["Mass.", "U.S."]).unwrap();
        assert_eq!(grammar.reporter_count(), DEFAULT_REPORTERS.len() + 1);
        assert_eq!(matches(&grammar, "12 Mass. 34"), vec!["12 Mass. 34"]);
    }
}
