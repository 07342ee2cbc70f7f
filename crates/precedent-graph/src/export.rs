//! Versioned JSON export of a citation network

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Export format written by this build
pub const FORMAT_VERSION: u32 = 1;

/// One weighted citation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    /// Citing opinion id
    pub citing: i64,

    /// Cited opinion id
    pub cited: i64,

    /// Number of contexts recorded for the pair
    pub weight: u32,
}

/// Serializable snapshot of a [`CitationNetwork`](crate::CitationNetwork)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkExport {
    /// Always [`FORMAT_VERSION`] when written by this build
    pub format_version: u32,

    /// Whether edge direction is meaningful
    pub directed: bool,

    /// Opinion ids, ascending
    pub nodes: Vec<i64>,

    /// Edges, ordered by (citing, cited)
    pub edges: Vec<ExportEdge>,
}

impl NetworkExport {
    /// Parse an export, rejecting other format versions
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let export: Self = serde_json::from_str(json)?;
        if export.format_version != FORMAT_VERSION {
            return Err(GraphError::UnsupportedVersion {
                found: export.format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(export)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read an export file
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Write an export file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), GraphError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
