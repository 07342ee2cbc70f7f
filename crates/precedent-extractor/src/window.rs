//! Token windows around citation mentions

use crate::config::ExtractorConfig;
use precedent_domain::Segmentation;

/// Relative token window `[index + start, index + end)` around a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    start: i64,
    end: i64,
}

impl ContextWindow {
    /// Window with the given relative offsets
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window configured by `config`
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.window_start, config.window_end)
    }

    /// Absolute token bounds for a mention at `index` in a stream of `token_count` tokens
    ///
    /// Always satisfies `0 <= start <= stop <= token_count`.
    pub fn bounds(&self, index: usize, token_count: usize) -> (usize, usize) {
        let n = token_count as i128;
        let i = index as i128;
        let start = (i + self.start as i128).clamp(0, n);
        let stop = (i + self.end as i128).clamp(start, n);
        (start as usize, stop as usize)
    }

    /// Rendered text of the window around the token at `index`
    pub fn extract(&self, index: usize, segmentation: &Segmentation, text: &str) -> String {
        let (start, stop) = self.bounds(index, segmentation.len());
        segmentation.render(text, start, stop).to_string()
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}
