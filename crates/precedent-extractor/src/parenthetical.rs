//! Parenthetical acceptance filter
//!
//! A parenthetical is recorded only when it says something about why the
//! cited case matters. Boilerplate (opinion-type labels, judge attributions,
//! alteration notes and the like) is rejected. Each rule is a separate
//! pattern that must match the whole trimmed text. Rules ignore case except
//! `single_word`.

use regex::Regex;
use std::sync::LazyLock;

const LABEL: &str =
    r"(?:majority|plurality|lead|principal|concurring|dissenting|in chambers|for the court|per curiam)";

const QUALIFIER: &str = r"(?:in part|in (?:the )?judgment(?: in part)?|in (?:the )?result(?: in part)?|(?:from|respecting|in) (?:the )?denial of (?:certiorari|rehearing|(?:the )?application for stay))";

const ANNOTATION: &str = r"(?:(?:some|internal|all|further|original)\s+)?(?:brackets?|footnotes?|alterations?|quotation marks?|quotations?|citations?|emphasis|ellipses|ellipsis|punctuation|modifications?|paragraph breaks?)";

const ANNOTATION_VERB: &str =
    r"(?:added|omitted|deleted|in original|altered|modified|supplied|removed)";

fn labels() -> String {
    let one = format!(r"{LABEL}(?:\s+{QUALIFIER})?");
    format!(r"{one}(?:(?:\s*,\s*(?:and\s+)?|\s+and\s+){one})*")
}

fn annotations() -> String {
    let list = format!(r"{ANNOTATION}(?:(?:\s*,\s*(?:and\s+)?|\s+and\s+){ANNOTATION})*");
    let clause = format!(r"{list}\s+{ANNOTATION_VERB}");
    format!(r"{clause}(?:(?:\s*[,;]\s*(?:and\s+)?|\s+and\s+){clause})*")
}

fn judge_attribution() -> String {
    let name = r"[^\s,]+(?:\s+[^\s,]+){0,2}";
    let title = r"(?:C\.\s*)?JJ?\.";
    let joined = format!(r"joined by .+?{title}");
    format!(
        r"{name},\s*{title}(?:,\s*{joined})?(?:,?\s*{labels})?(?:,\s*{joined})?",
        labels = labels()
    )
}

static RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let rules = [
        ("opinion_type", format!(r"{}(?:\s+(?:opinion|statement))?", labels())),
        ("judge_attribution", judge_attribution()),
        ("annotation", annotations()),
        ("same_or_similar", r"same|similar".to_string()),
        ("slip_opinion", r"slip op\b.*".to_string()),
        ("denying_certiorari", r"denying certiorari|cert(?:iorari|\.)? denied".to_string()),
        // Case-sensitive: a bare word, optionally numbered `I` to `III`
        ("single_word", r"(?-i:\w+(?: I{1,3})?)".to_string()),
        ("opinion_of", r"opinion of .*".to_string()),
        ("opinion_in_chambers", r"opinion in chambers".to_string()),
    ];

    rules
        .into_iter()
        .map(|(name, body)| {
            let regex = Regex::new(&format!(r"(?is)^(?:{body})$"))
                .expect("valid parenthetical rule regex");
            (name, regex)
        })
        .collect()
});

/// Accepts substantive parentheticals, rejects boilerplate
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentheticalFilter;

impl ParentheticalFilter {
    /// Create a filter
    pub fn new() -> Self {
        Self
    }

    /// Whether a parenthetical should be recorded
    ///
    /// Absent and blank text is rejected.
    pub fn accepts(&self, parenthetical: Option<&str>) -> bool {
        match parenthetical.map(str::trim) {
            None | Some("") => false,
            Some(text) => self.matching_rule(text).is_none(),
        }
    }

    /// Name of the first rejection rule matching the whole trimmed text
    pub fn matching_rule(&self, text: &str) -> Option<&'static str> {
        let text = text.trim();
        RULES
            .iter()
            .find(|(_, rule)| rule.is_match(text))
            .map(|(name, _)| *name)
    }

    /// Names of all rejection rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        RULES.iter().map(|(name, _)| *name).collect()
    }
}
