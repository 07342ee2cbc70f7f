//! Flatten stored opinion markup to plain text

use precedent_domain::traits::TextExtractor;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static NON_TEXT_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->")
        .expect("valid non-text element regex")
});

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:p|div|br|li|ul|ol|tr|td|th|table|blockquote|pre|center|h[1-6])\b[^>]*>")
        .expect("valid block tag regex")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid entity regex")
});

/// Markup-to-text extractor for stored opinion HTML
///
/// Block-level tags become line breaks so text from adjacent paragraphs does
/// not run together; every other tag is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

impl HtmlTextExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract_text(&self, markup: &str) -> String {
        if !markup.contains('<') && !markup.contains('&') {
            return markup.to_string();
        }

        let text = NON_TEXT_ELEMENTS.replace_all(markup, "");
        let text = BLOCK_TAG.replace_all(&text, "\n");
        let text = ANY_TAG.replace_all(&text, "");
        ENTITY.replace_all(&text, decode_entity).into_owned()
    }
}

fn decode_entity(caps: &Captures<'_>) -> String {
    let name = &caps[1];
    let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        named_entity(name)
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "sect" => '§',
        "para" => '¶',
        "mdash" => '—',
        "ndash" => '–',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        _ => return None,
    };
    Some(c)
}
