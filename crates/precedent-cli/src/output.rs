//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use precedent_batch::BatchMetrics;
use precedent_domain::{CitationContext, OpinionId, OpinionParenthetical};
use precedent_graph::CitationNetwork;
use std::collections::BTreeSet;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest text shown in a table cell.
const MAX_CELL_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the relationships stored for one citing opinion.
    pub fn format_relationships(
        &self,
        citing: OpinionId,
        parentheticals: &[OpinionParenthetical],
        contexts: &[CitationContext],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "citing_opinion_id": citing.value(),
                    "parentheticals": parentheticals
                        .iter()
                        .map(|p| serde_json::json!({
                            "cited_opinion_id": p.cited_opinion_id.value(),
                            "text": p.text,
                        }))
                        .collect::<Vec<_>>(),
                    "contexts": contexts
                        .iter()
                        .map(|c| serde_json::json!({
                            "cited_opinion_id": c.cited_opinion_id.value(),
                            "text": c.text,
                        }))
                        .collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if parentheticals.is_empty() && contexts.is_empty() {
                    return Ok(self.colorize(
                        &format!("No relationships stored for opinion {}.", citing),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["Kind", "Cited", "Text"]);
                for p in parentheticals {
                    builder.push_record([
                        "parenthetical".to_string(),
                        p.cited_opinion_id.to_string(),
                        truncate(&p.text),
                    ]);
                }
                for c in contexts {
                    builder.push_record([
                        "context".to_string(),
                        c.cited_opinion_id.to_string(),
                        truncate(&c.text),
                    ]);
                }
                Ok(render(builder))
            }
            OutputFormat::Quiet => {
                let cited: BTreeSet<OpinionId> = parentheticals
                    .iter()
                    .map(|p| p.cited_opinion_id)
                    .chain(contexts.iter().map(|c| c.cited_opinion_id))
                    .collect();
                let ids: Vec<String> = cited.iter().map(ToString::to_string).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format the outcome of a batch run.
    pub fn format_metrics(&self, metrics: &BatchMetrics, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "dry_run": dry_run,
                    "processed": metrics.processed,
                    "committed": metrics.committed,
                    "parentheticals_written": metrics.parentheticals_written,
                    "contexts_written": metrics.contexts_written,
                    "total_runtime_ms": metrics.total_runtime_ms,
                    "failed": metrics
                        .failed
                        .iter()
                        .map(|(id, message)| serde_json::json!({
                            "opinion_id": id.value(),
                            "error": message,
                        }))
                        .collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Processed".to_string(), metrics.processed.to_string()]);
                builder.push_record(["Committed".to_string(), metrics.committed.to_string()]);
                builder.push_record(["Failed".to_string(), metrics.failure_count().to_string()]);
                builder.push_record([
                    "Parentheticals".to_string(),
                    metrics.parentheticals_written.to_string(),
                ]);
                builder.push_record(["Contexts".to_string(), metrics.contexts_written.to_string()]);
                builder.push_record([
                    "Runtime".to_string(),
                    format!("{}ms", metrics.total_runtime_ms),
                ]);

                let mut lines = Vec::new();
                if dry_run {
                    lines.push(self.warning("Dry run: nothing was committed"));
                }
                lines.push(render(builder));
                for (id, message) in &metrics.failed {
                    lines.push(self.error(&format!("Opinion {}: {}", id, message)));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(format!(
                "{} {} {}",
                metrics.processed,
                metrics.committed,
                metrics.failure_count()
            )),
        }
    }

    /// Format a citation network summary.
    pub fn format_network(&self, network: &CitationNetwork, written_to: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "nodes": network.node_count(),
                    "edges": network.edge_count(),
                    "directed": network.is_directed(),
                    "output": written_to.display().to_string(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.success(&format!(
                "Wrote {} network with {} opinions and {} edges to {}",
                if network.is_directed() { "directed" } else { "undirected" },
                network.node_count(),
                network.edge_count(),
                written_to.display()
            ))),
            OutputFormat::Quiet => Ok(written_to.display().to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn truncate(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_CELL_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(MAX_CELL_CHARS - 1).collect();
    cut.push('…');
    cut
}
