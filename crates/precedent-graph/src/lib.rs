//! Precedent Graph
//!
//! Builds a weighted citation network from committed citation contexts.
//!
//! Each (citing, cited) pair with at least one stored context becomes an edge
//! whose weight is the number of contexts. Networks can be exported to a
//! versioned JSON file and reused as a cache.
//!
//! ```no_run
//! use precedent_graph::{CitationNetwork, GraphConfig};
//! use precedent_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("precedent.db")?;
//! let network = CitationNetwork::load_or_build(&store, &GraphConfig::default())?;
//! println!("{} opinions, {} edges", network.node_count(), network.edge_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod network;

pub use config::GraphConfig;
pub use error::GraphError;
pub use export::{ExportEdge, NetworkExport, FORMAT_VERSION};
pub use network::CitationNetwork;
