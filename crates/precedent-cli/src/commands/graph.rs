//! Graph command implementation.

use crate::cli::GraphArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use precedent_graph::CitationNetwork;
use precedent_store::SqliteStore;
use std::path::PathBuf;
use tracing::info;

/// Execute the graph command.
pub fn execute_graph(args: GraphArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    let (network, output) = graph(&args, config)?;
    println!("{}", formatter.format_network(&network, &output)?);
    Ok(())
}

/// Build or load the network and write its export, returning where it went.
pub fn graph(args: &GraphArgs, config: &mut Config) -> Result<(CitationNetwork, PathBuf)> {
    args.apply(config);
    config.validate()?;

    let store = SqliteStore::new(&config.database_path)?;
    let network = CitationNetwork::load_or_build(&store, &config.graph)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.graph.cache_path.clone());
    network.to_export().save(&output)?;
    info!("Wrote citation network export to {}", output.display());

    Ok((network, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_domain::traits::OpinionStore;
    use precedent_domain::{CitationContext, ClusterId, Opinion, OpinionId};
    use precedent_graph::NetworkExport;
    use tempfile::TempDir;

    fn seeded(dir: &TempDir) -> Config {
        let path = dir.path().join("precedent.db");
        let mut store = SqliteStore::new(&path).unwrap();
        store.insert_cluster(ClusterId::new(1), "2 U.S. 100").unwrap();
        for id in 1..=2 {
            store
                .insert_opinion(OpinionId::new(id), Some("text"), Some(ClusterId::new(1)))
                .unwrap();
        }
        let mut cited = Opinion::new(OpinionId::new(2), None, None, None);
        cited.contexts.push(CitationContext::new(
            OpinionId::new(1),
            OpinionId::new(2),
            "See 2 U.S. 100".into(),
        ));
        store.commit_relationships(OpinionId::new(1), &[cited]).unwrap();

        let mut config = Config {
            database_path: path,
            ..Default::default()
        };
        config.graph.cache_path = dir.path().join("cache.json");
        config
    }

    #[test]
    fn test_graph_writes_cache_by_default() {
        let dir = TempDir::new().unwrap();
        let mut config = seeded(&dir);

        let (network, output) = graph(&GraphArgs::default(), &mut config).unwrap();
        assert_eq!(output, dir.path().join("cache.json"));
        assert_eq!(NetworkExport::load(&output).unwrap(), network.to_export());
        assert!(!network.is_directed());
    }

    #[test]
    fn test_graph_output_without_cache() {
        let dir = TempDir::new().unwrap();
        let mut config = seeded(&dir);
        let args = GraphArgs {
            output: Some(dir.path().join("out").join("network.json")),
            directed: true,
            no_cache: true,
        };

        let (network, output) = graph(&args, &mut config).unwrap();
        assert!(network.is_directed());
        assert_eq!(network.weight(OpinionId::new(1), OpinionId::new(2)), Some(1));
        assert!(output.exists());
        assert!(!dir.path().join("cache.json").exists());
    }
}
