//! Single-document segmentation cache
//!
//! Citation token indices are only valid against the segmentation they were
//! produced from. A [`CachingTokenizer`] binds itself to the first document it
//! sees and hands out that one segmentation for the rest of its life, so the
//! detector and the window extractor always agree on token positions.

use crate::error::TokenizerError;
use precedent_domain::traits::Segmenter;
use precedent_domain::Segmentation;
use std::cell::OnceCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug)]
struct Bound {
    fingerprint: u64,
    len: usize,
    segmentation: Segmentation,
}

/// Segments one document at most once
#[derive(Debug)]
pub struct CachingTokenizer<'a, S: Segmenter> {
    segmenter: &'a S,
    bound: OnceCell<Bound>,
}

impl<'a, S: Segmenter> CachingTokenizer<'a, S> {
    /// Create an unbound tokenizer
    pub fn new(segmenter: &'a S) -> Self {
        Self {
            segmenter,
            bound: OnceCell::new(),
        }
    }

    /// Segment `text`, or return the cached segmentation if `text` is the bound document
    ///
    /// Passing a different document after the first call is an error rather
    /// than a silent re-segmentation.
    pub fn tokenize(&self, text: &str) -> Result<&Segmentation, TokenizerError> {
        let fingerprint = fingerprint(text);
        let bound = self.bound.get_or_init(|| Bound {
            fingerprint,
            len: text.len(),
            segmentation: self.segmenter.segment(text),
        });

        if bound.fingerprint != fingerprint || bound.len != text.len() {
            return Err(TokenizerError::DocumentMismatch {
                bound_len: bound.len,
                given_len: text.len(),
            });
        }
        Ok(&bound.segmentation)
    }

    /// The cached segmentation, if a document has been bound
    pub fn segmentation(&self) -> Option<&Segmentation> {
        self.bound.get().map(|b| &b.segmentation)
    }
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::ReporterSegmenter;
    use std::cell::Cell;

    struct CountingSegmenter {
        inner: ReporterSegmenter,
        calls: Cell<usize>,
    }

    impl Segmenter for CountingSegmenter {
        fn segment(&self, text: &str) -> Segmentation {
            self.calls.set(self.calls.get() + 1);
            self.inner.segment(text)
        }
    }

    fn counting() -> CountingSegmenter {
        CountingSegmenter {
            inner: ReporterSegmenter::default(),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_segments_at_most_once() {
        let segmenter = counting();
        let tokenizer = CachingTokenizer::new(&segmenter);
        let text = "See 2 U.S. 100 and 2 U.S. 100 again.";

        let first = tokenizer.tokenize(text).unwrap().clone();
        let second = tokenizer.tokenize(text).unwrap();

        assert_eq!(&first, second);
        assert_eq!(segmenter.calls.get(), 1);
    }

    #[test]
    fn test_unbound_has_no_segmentation() {
        let segmenter = counting();
        let tokenizer = CachingTokenizer::new(&segmenter);
        assert!(tokenizer.segmentation().is_none());
        assert_eq!(segmenter.calls.get(), 0);
    }

    #[test]
    fn test_rejects_a_different_document() {
        let segmenter = counting();
        let tokenizer = CachingTokenizer::new(&segmenter);
        tokenizer.tokenize("first document").unwrap();

        let err = tokenizer.tokenize("second").unwrap_err();
        assert_eq!(
            err,
            TokenizerError::DocumentMismatch {
                bound_len: 14,
                given_len: 6
            }
        );
        assert_eq!(segmenter.calls.get(), 1);
        assert_eq!(tokenizer.segmentation().map(|s| s.len()), Some(2));
    }
}
