//! Token stream produced by one segmentation pass over a document
//!
//! Token indices are only meaningful relative to the [`Segmentation`] they came
//! from. Mentions carry such an index and must never be interpreted against a
//! different document or a recomputed stream.

use std::ops::Range;

/// One token of a segmented document
///
/// `span` covers the token text plus the whitespace that follows it, so the
/// spans of consecutive tokens are contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range in the source text, trailing whitespace included
    pub span: Range<usize>,

    /// Length in bytes of the token text without trailing whitespace
    pub text_len: usize,
}

impl Token {
    /// Create a token from its full span and the length of its non-space text
    pub fn new(span: Range<usize>, text_len: usize) -> Self {
        Self { span, text_len }
    }

    /// The token text without trailing whitespace
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.start + self.text_len]
    }
}

/// The result of segmenting one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Every token of the document, in order
    pub tokens: Vec<Token>,

    /// Indices into `tokens` of the tokens recognised as citations
    pub citation_tokens: Vec<usize>,
}

impl Segmentation {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document produced no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render tokens `[start, stop)` back to source text, original spacing preserved
    ///
    /// Out-of-range bounds are clamped and an empty or inverted range renders
    /// to an empty string.
    pub fn render<'a>(&self, source: &'a str, start: usize, stop: usize) -> &'a str {
        let stop = stop.min(self.tokens.len());
        if start >= stop {
            return "";
        }
        &source[self.tokens[start].span.start..self.tokens[stop - 1].span.end]
    }
}
