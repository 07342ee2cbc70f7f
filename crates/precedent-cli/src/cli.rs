//! CLI command definitions and argument parsing.

use crate::config::{Config, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Precedent CLI - Extract citation contexts from court opinions.
#[derive(Debug, Parser)]
#[command(name = "precedent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database path
    #[arg(short, long, global = true, env = "PRECEDENT_DATABASE")]
    pub database: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids and counts only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and store parentheticals and contexts for every opinion (default)
    Populate(PopulateArgs),

    /// Show the relationships stored for one citing opinion
    Show(ShowArgs),

    /// Build or load the citation network and write its export
    Graph(GraphArgs),
}

/// Arguments for the populate command.
#[derive(Debug, Clone, Default, Args)]
pub struct PopulateArgs {
    /// Process opinions without committing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Process at most this many opinions
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Skip opinions with an id at or below this one
    #[arg(long)]
    pub start_after: Option<i64>,

    /// Window start, in tokens relative to the citation
    #[arg(long, allow_hyphen_values = true)]
    pub window_start: Option<i64>,

    /// Window end (exclusive), in tokens relative to the citation
    #[arg(long, allow_hyphen_values = true)]
    pub window_end: Option<i64>,
}

impl PopulateArgs {
    /// Override configuration values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if self.dry_run {
            config.batch.dry_run = true;
        }
        if let Some(limit) = self.limit {
            config.batch.limit = Some(limit);
        }
        if let Some(start_after) = self.start_after {
            config.batch.start_after = Some(start_after);
        }
        if let Some(start) = self.window_start {
            config.extractor.window_start = start;
        }
        if let Some(end) = self.window_end {
            config.extractor.window_end = end;
        }
    }
}

/// Arguments for the show command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Citing opinion id
    pub opinion_id: i64,
}

/// Arguments for the graph command.
#[derive(Debug, Clone, Default, Args)]
pub struct GraphArgs {
    /// Where to write the export (defaults to the cache path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep edge direction
    #[arg(long)]
    pub directed: bool,

    /// Ignore and do not write the cache file
    #[arg(long)]
    pub no_cache: bool,
}

impl GraphArgs {
    /// Override configuration values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if self.directed {
            config.graph.directed = true;
        }
        if self.no_cache {
            config.graph.enable_caching = false;
        }
    }
}
