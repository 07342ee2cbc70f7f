//! Default segmentation pass

use crate::grammar::CitationGrammar;
use precedent_domain::traits::Segmenter;
use precedent_domain::{Segmentation, Token};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+\s*").expect("valid word regex"));

/// Splits text on whitespace, keeping each citation as a single token
///
/// Every token absorbs the whitespace that follows it. Leading whitespace at
/// the very start of a document belongs to no token.
#[derive(Debug, Clone)]
pub struct ReporterSegmenter {
    grammar: Arc<CitationGrammar>,
}

impl ReporterSegmenter {
    /// Create a segmenter over a shared grammar
    pub fn new(grammar: Arc<CitationGrammar>) -> Self {
        Self { grammar }
    }

    /// The grammar used to recognise citation tokens
    pub fn grammar(&self) -> &Arc<CitationGrammar> {
        &self.grammar
    }
}

impl Default for ReporterSegmenter {
    fn default() -> Self {
        Self::new(Arc::new(CitationGrammar::default()))
    }
}

impl Segmenter for ReporterSegmenter {
    fn segment(&self, text: &str) -> Segmentation {
        let mut segmentation = Segmentation::default();
        let mut cursor = 0;

        for citation in self.grammar.find_iter(text) {
            push_words(text, cursor, citation.start(), &mut segmentation.tokens);

            let rest = &text[citation.end()..];
            let trailing = rest.len() - rest.trim_start().len();
            let end = citation.end() + trailing;

            segmentation.citation_tokens.push(segmentation.tokens.len());
            segmentation
                .tokens
                .push(Token::new(citation.start()..end, citation.len()));
            cursor = end;
        }

        push_words(text, cursor, text.len(), &mut segmentation.tokens);
        segmentation
    }
}

fn push_words(text: &str, from: usize, to: usize, tokens: &mut Vec<Token>) {
    if from >= to {
        return;
    }
    for word in WORD.find_iter(&text[from..to]) {
        let text_len = word.as_str().trim_end().len();
        tokens.push(Token::new(from + word.start()..from + word.end(), text_len));
    }
}
