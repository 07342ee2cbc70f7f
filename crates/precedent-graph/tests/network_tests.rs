//! Building and caching networks from a SQLite store

use precedent_domain::traits::OpinionStore;
use precedent_domain::{CitationContext, ClusterId, Opinion, OpinionId};
use precedent_graph::{CitationNetwork, GraphConfig, NetworkExport};
use precedent_store::SqliteStore;
use std::fs;
use tempfile::TempDir;

fn id(value: i64) -> OpinionId {
    OpinionId::new(value)
}

fn cited(citing: OpinionId, cited: OpinionId, contexts: usize) -> Opinion {
    let mut opinion = Opinion::new(cited, None, None, None);
    for i in 0..contexts {
        opinion
            .contexts
            .push(CitationContext::new(citing, cited, format!("context {}", i)));
    }
    opinion
}

fn store_with_citations() -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.insert_cluster(ClusterId::new(1), "2 U.S. 100").unwrap();
    for value in 1..=3 {
        store
            .insert_opinion(id(value), Some("text"), Some(ClusterId::new(1)))
            .unwrap();
    }
    store
        .commit_relationships(id(1), &[cited(id(1), id(2), 2), cited(id(1), id(3), 1)])
        .unwrap();
    store
        .commit_relationships(id(3), &[cited(id(3), id(2), 4)])
        .unwrap();
    store
}

fn config(dir: &TempDir, directed: bool) -> GraphConfig {
    GraphConfig {
        cache_path: dir.path().join("cache").join("network.json"),
        directed,
        enable_caching: true,
    }
}

#[test]
fn test_build_weights_from_contexts() {
    let store = store_with_citations();
    let network = CitationNetwork::build(&store, true).unwrap();

    assert_eq!(network.node_count(), 3);
    assert_eq!(network.edge_count(), 3);
    assert_eq!(network.weight(id(1), id(2)), Some(2));
    assert_eq!(network.weight(id(3), id(2)), Some(4));
    assert_eq!(network.citing(id(2)), vec![id(1), id(3)]);
}

#[test]
fn test_load_or_build_writes_then_reuses_cache() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, true);
    let store = store_with_citations();

    let built = CitationNetwork::load_or_build(&store, &config).unwrap();
    assert!(config.cache_path.exists());

    // An empty store proves the second call reads the cache
    let empty = SqliteStore::new(":memory:").unwrap();
    let cached = CitationNetwork::load_or_build(&empty, &config).unwrap();
    assert_eq!(cached.to_export(), built.to_export());
}

#[test]
fn test_corrupt_cache_is_rebuilt() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, false);
    fs::create_dir_all(config.cache_path.parent().unwrap()).unwrap();
    fs::write(&config.cache_path, "{ not json").unwrap();

    let network = CitationNetwork::load_or_build(&store_with_citations(), &config).unwrap();

    assert_eq!(network.edge_count(), 3);
    let rewritten = NetworkExport::load(&config.cache_path).unwrap();
    assert_eq!(rewritten, network.to_export());
}

#[test]
fn test_cache_with_other_directedness_is_ignored() {
    let dir = TempDir::new().unwrap();
    let store = store_with_citations();
    CitationNetwork::load_or_build(&store, &config(&dir, true)).unwrap();

    let undirected = CitationNetwork::load_or_build(&store, &config(&dir, false)).unwrap();
    assert!(!undirected.is_directed());
    assert_eq!(undirected.weight(id(2), id(1)), Some(2));
}

#[test]
fn test_caching_disabled_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = GraphConfig {
        enable_caching: false,
        ..config(&dir, true)
    };

    CitationNetwork::load_or_build(&store_with_citations(), &config).unwrap();
    assert!(!config.cache_path.exists());
}
