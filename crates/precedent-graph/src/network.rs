//! Weighted citation network built from stored contexts

use crate::export::{ExportEdge, NetworkExport, FORMAT_VERSION};
use crate::{GraphConfig, GraphError};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use precedent_domain::traits::OpinionStore;
use precedent_domain::OpinionId;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;
use tracing::{info, warn};

/// Citation network over opinions
///
/// Edges run citing → cited and are weighted by the number of contexts
/// recorded for the pair. An undirected network keeps the same edges but
/// answers neighbour and weight queries without regard to direction.
#[derive(Debug, Clone)]
pub struct CitationNetwork {
    graph: DiGraph<OpinionId, u32>,
    nodes: HashMap<OpinionId, NodeIndex>,
    directed: bool,
}

impl CitationNetwork {
    /// Build a network from weighted (citing, cited, weight) edges
    pub fn from_edges<I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (OpinionId, OpinionId, u32)>,
    {
        let mut network = Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            directed,
        };
        for (citing, cited, weight) in edges {
            let from = network.node(citing);
            let to = network.node(cited);
            match network.graph.find_edge(from, to) {
                Some(edge) => network.graph[edge] += weight,
                None => {
                    network.graph.add_edge(from, to, weight);
                }
            }
        }
        network
    }

    /// Build a network from the relationships committed to `store`
    pub fn build<S>(store: &S, directed: bool) -> Result<Self, GraphError>
    where
        S: OpinionStore,
        S::Error: Display,
    {
        let edges = store
            .citation_edges()
            .map_err(|e| GraphError::Store(e.to_string()))?;
        let network = Self::from_edges(edges, directed);
        info!(
            "Built citation network: {} opinions, {} edges",
            network.node_count(),
            network.edge_count()
        );
        Ok(network)
    }

    /// Load the cached network if possible, otherwise build and cache it
    ///
    /// Cache problems are logged and never fatal.
    pub fn load_or_build<S>(store: &S, config: &GraphConfig) -> Result<Self, GraphError>
    where
        S: OpinionStore,
        S::Error: Display,
    {
        config.validate().map_err(GraphError::Config)?;

        if config.enable_caching && config.cache_path.exists() {
            match NetworkExport::load(&config.cache_path).map(Self::from_export) {
                Ok(network) if network.directed == config.directed => {
                    info!("Loaded citation network from {}", config.cache_path.display());
                    return Ok(network);
                }
                Ok(_) => warn!(
                    "Cached network at {} has the wrong directedness, rebuilding",
                    config.cache_path.display()
                ),
                Err(e) => warn!(
                    "Loading citation network from {} failed: {}",
                    config.cache_path.display(),
                    e
                ),
            }
        }

        let network = Self::build(store, config.directed)?;

        if config.enable_caching {
            if let Err(e) = network.to_export().save(&config.cache_path) {
                warn!(
                    "Saving citation network to {} failed: {}",
                    config.cache_path.display(),
                    e
                );
            }
        }

        Ok(network)
    }

    /// Rebuild a network from an export
    pub fn from_export(export: NetworkExport) -> Self {
        let mut network = Self::from_edges(
            export.edges.iter().map(|e| {
                (OpinionId::new(e.citing), OpinionId::new(e.cited), e.weight)
            }),
            export.directed,
        );
        for id in export.nodes {
            network.node(OpinionId::new(id));
        }
        network
    }

    /// Snapshot the network
    pub fn to_export(&self) -> NetworkExport {
        let nodes: BTreeSet<i64> = self.nodes.keys().map(|id| id.value()).collect();
        let mut edges: Vec<ExportEdge> = self
            .graph
            .edge_references()
            .map(|edge| ExportEdge {
                citing: self.graph[edge.source()].value(),
                cited: self.graph[edge.target()].value(),
                weight: *edge.weight(),
            })
            .collect();
        edges.sort_by_key(|e| (e.citing, e.cited));

        NetworkExport {
            format_version: FORMAT_VERSION,
            directed: self.directed,
            nodes: nodes.into_iter().collect(),
            edges,
        }
    }

    /// Whether edge direction is meaningful
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of opinions in the network
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of citing → cited pairs
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `id` appears in the network
    pub fn contains(&self, id: OpinionId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Weight between two opinions
    ///
    /// For an undirected network both directions are summed.
    pub fn weight(&self, citing: OpinionId, cited: OpinionId) -> Option<u32> {
        let (&from, &to) = (self.nodes.get(&citing)?, self.nodes.get(&cited)?);
        let forward = self.graph.find_edge(from, to).map(|e| self.graph[e]);
        if self.directed || from == to {
            return forward;
        }
        let backward = self.graph.find_edge(to, from).map(|e| self.graph[e]);
        match (forward, backward) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0) + b.unwrap_or(0)),
        }
    }

    /// Opinions cited by `id` (all neighbours when undirected), ascending
    pub fn cited_by(&self, id: OpinionId) -> Vec<OpinionId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Opinions citing `id` (all neighbours when undirected), ascending
    pub fn citing(&self, id: OpinionId) -> Vec<OpinionId> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: OpinionId, direction: Direction) -> Vec<OpinionId> {
        let Some(&index) = self.nodes.get(&id) else {
            return Vec::new();
        };
        let neighbors: BTreeSet<OpinionId> = if self.directed {
            self.graph
                .neighbors_directed(index, direction)
                .map(|n| self.graph[n])
                .collect()
        } else {
            self.graph
                .neighbors_undirected(index)
                .map(|n| self.graph[n])
                .collect()
        };
        neighbors.into_iter().collect()
    }

    fn node(&mut self, id: OpinionId) -> NodeIndex {
        if let Some(&index) = self.nodes.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id);
        self.nodes.insert(id, index);
        index
    }
}
