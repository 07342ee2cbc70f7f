//! Canonical reporter keys
//!
//! A reporter key is the `volume reporter page` string stored on each cluster.
//! Citations match stored opinions only when the key built from a citation is
//! byte-equal to the stored one, so both sides must go through [`ReporterKey::build`].
//!
//! Formatting rule:
//! - each component is trimmed and internal whitespace runs collapse to one space
//! - empty components are treated as absent
//! - present components are joined with a single space in volume, reporter, page order
//! - case and punctuation are preserved

use std::fmt;

/// Canonical `volume reporter page` key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReporterKey(String);

impl ReporterKey {
    /// Build a key from optional components, tolerating any absent part
    ///
    /// # Examples
    ///
    /// ```
    /// use precedent_domain::ReporterKey;
    ///
    /// let key = ReporterKey::build(Some("2"), Some("U.S."), Some("100"));
    /// assert_eq!(key.as_str(), "2 U.S. 100");
    ///
    /// let partial = ReporterKey::build(None, Some(" F.  Supp. "), Some("7"));
    /// assert_eq!(partial.as_str(), "F. Supp. 7");
    /// ```
    pub fn build(volume: Option<&str>, reporter: Option<&str>, page: Option<&str>) -> Self {
        let parts: Vec<String> = [volume, reporter, page]
            .into_iter()
            .flatten()
            .map(collapse_whitespace)
            .filter(|part| !part.is_empty())
            .collect();
        Self(parts.join(" "))
    }

    /// Normalize an already-formatted reporter string (as stored on a cluster)
    pub fn from_stored(reporter: &str) -> Self {
        Self(collapse_whitespace(reporter))
    }

    /// Borrow the key text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether every component was absent
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ReporterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReporterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn collapse_whitespace(part: &str) -> String {
    part.split_whitespace().collect::<Vec<_>>().join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Keys never contain leading, trailing or doubled whitespace
        #[test]
        fn test_key_whitespace_is_canonical(
            volume in "[ 0-9\t]{0,6}",
            reporter in "[ A-Za-z.\t]{0,12}",
            page in "[ 0-9\n]{0,6}",
        ) {
            let key = ReporterKey::build(Some(&volume), Some(&reporter), Some(&page));
            let text = key.as_str();

            prop_assert!(!text.starts_with(' '));
            prop_assert!(!text.ends_with(' '));
            prop_assert!(!text.contains("  "));
            prop_assert!(!text.contains('\t'));
            prop_assert!(!text.contains('\n'));
        }

        /// Property: Re-normalizing a built key is a no-op
        #[test]
        fn test_key_is_idempotent(
            volume in "[ 0-9]{0,6}",
            reporter in "[ A-Za-z.]{0,12}",
            page in "[ 0-9]{0,6}",
        ) {
            let key = ReporterKey::build(Some(&volume), Some(&reporter), Some(&page));
            prop_assert_eq!(ReporterKey::from_stored(key.as_str()), key);
        }
    }
}
