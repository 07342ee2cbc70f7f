//! Deterministic text cleanup applied before citation detection

use regex::Regex;
use std::sync::LazyLock;

/// Rewrite rules, applied in order
///
/// The detector grammar expects the compact `U.S.` spelling; opinions often
/// print it as `U. S.`.
static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![(
        Regex::new(r"\bU\.[ \t\x{00A0}]+S\.").expect("valid U.S. regex"),
        "U.S.",
    )]
});

/// Pure substitution pass over flattened opinion text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a normalizer
    pub fn new() -> Self {
        Self
    }

    /// Apply every substitution rule
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for (pattern, replacement) in SUBSTITUTIONS.iter() {
            normalized = pattern.replace_all(&normalized, *replacement).into_owned();
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compacts_us_abbreviation() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Roe v. Wade, 410 U. S. 113 (1973)"),
            "Roe v. Wade, 410 U.S. 113 (1973)"
        );
    }

    #[test]
    fn test_handles_repeated_and_wide_spacing() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("1 U.  S. 2 and 3 U.\u{00A0}S. 4"),
            "1 U.S. 2 and 3 U.S. 4"
        );
    }

    #[test]
    fn test_leaves_other_text_alone() {
        let normalizer = TextNormalizer::new();
        let text = "See 5 F. Supp. 9; the U.S. Code; J. S. Mill";
        assert_eq!(normalizer.normalize(text), text);
    }

    #[test]
    fn test_is_deterministic() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("2 U. S. 100");
        assert_eq!(normalizer.normalize(&once), once);
    }
}
