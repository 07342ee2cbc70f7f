//! Metrics collection for batch runs

use precedent_domain::OpinionId;

/// Metrics collected during one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    /// Opinions visited
    pub processed: usize,

    /// Opinions whose relationships were committed
    pub committed: usize,

    /// Opinions that failed, with the error message
    pub failed: Vec<(OpinionId, String)>,

    /// Parenthetical records written
    pub parentheticals_written: usize,

    /// Context records written
    pub contexts_written: usize,

    /// Total runtime in milliseconds
    pub total_runtime_ms: u64,
}

impl BatchMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed opinion
    pub fn record_commit(&mut self, parentheticals: usize, contexts: usize) {
        self.committed += 1;
        self.parentheticals_written += parentheticals;
        self.contexts_written += contexts;
    }

    /// Record a failed opinion
    pub fn record_failure(&mut self, id: OpinionId, message: impl Into<String>) {
        self.failed.push((id, message.into()));
    }

    /// Number of failed opinions
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Batch Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Processed: {}", self.processed),
            format!("Committed: {}", self.committed),
            format!("Failed: {}", self.failure_count()),
            format!("Parentheticals written: {}", self.parentheticals_written),
            format!("Contexts written: {}", self.contexts_written),
            format!("Total runtime: {}ms", self.total_runtime_ms),
        ];

        if !self.failed.is_empty() {
            lines.push(String::new());
            lines.push("Failures:".to_string());
            for (id, message) in &self.failed {
                lines.push(format!("  {}: {}", id, message));
            }
        }

        lines.join("\n")
    }
}
