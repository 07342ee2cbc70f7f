//! BatchDriver: runs the extractor over every stored opinion

use crate::{BatchConfig, BatchError, BatchMetrics};
use precedent_domain::traits::{
    CitationDetector, CitationResolver, OpinionStore, Segmenter, TextExtractor,
};
use precedent_domain::OpinionId;
use precedent_extractor::{
    ContextExtractor, ExtractorConfig, HtmlTextExtractor, ReporterCitationDetector,
    ReporterResolver, ReporterSegmenter,
};
use std::fmt::Display;
use std::time::Instant;
use tracing::{error, info};

/// Drives the extractor across the whole corpus
///
/// Opinions are processed one at a time in id order. Each successful opinion
/// is committed before the next one starts, so a crash loses at most the
/// opinion in flight. A failing opinion is logged and skipped without a
/// commit; it never stops the run.
///
/// # Examples
///
/// ```no_run
/// use precedent_batch::{BatchConfig, BatchDriver};
/// use precedent_extractor::ExtractorConfig;
/// use precedent_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new("precedent.db")?;
/// let driver = BatchDriver::new(ExtractorConfig::default(), BatchConfig::default())?;
///
/// let metrics = driver.run(&mut store)?;
/// println!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct BatchDriver<
    G = ReporterSegmenter,
    D = ReporterCitationDetector,
    R = ReporterResolver,
    E = HtmlTextExtractor,
> {
    extractor: ContextExtractor<G, D, R, E>,
    config: BatchConfig,
}

impl BatchDriver {
    /// Create a driver with the default extractor
    pub fn new(extractor_config: ExtractorConfig, config: BatchConfig) -> Result<Self, BatchError> {
        let extractor = ContextExtractor::new(extractor_config)
            .map_err(|e| BatchError::Config(e.to_string()))?;
        Self::with_extractor(extractor, config)
    }
}

impl<G, D, R, E> BatchDriver<G, D, R, E>
where
    G: Segmenter,
    D: CitationDetector,
    R: CitationResolver,
    E: TextExtractor,
    D::Error: Display,
    R::Error: Display,
{
    /// Create a driver around an existing extractor
    pub fn with_extractor(
        extractor: ContextExtractor<G, D, R, E>,
        config: BatchConfig,
    ) -> Result<Self, BatchError> {
        config.validate().map_err(BatchError::Config)?;
        Ok(Self { extractor, config })
    }

    /// Get the batch configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Opinion ids this run will visit, in order
    pub fn select<S>(&self, store: &S) -> Result<Vec<OpinionId>, BatchError>
    where
        S: OpinionStore,
        S::Error: Display,
    {
        let mut ids = store
            .opinion_ids()
            .map_err(|e| BatchError::Store(e.to_string()))?;
        ids.sort();

        if let Some(after) = self.config.start_after {
            ids.retain(|id| id.value() > after);
        }
        if let Some(limit) = self.config.limit {
            ids.truncate(limit);
        }
        Ok(ids)
    }

    /// Process every selected opinion
    ///
    /// Only a failure to list opinions is returned as an error.
    pub fn run<S>(&self, store: &mut S) -> Result<BatchMetrics, BatchError>
    where
        S: OpinionStore,
        S::Error: Display,
    {
        let start = Instant::now();
        let mut metrics = BatchMetrics::new();
        let ids = self.select(store)?;

        info!(
            "Starting batch over {} opinions{}",
            ids.len(),
            if self.config.dry_run { " (dry run)" } else { "" }
        );

        for id in ids {
            metrics.processed += 1;

            let result = match self.extractor.extract(store, id) {
                Ok(result) => result,
                Err(e) => {
                    error!("Failed to process opinion {}: {}", id, e);
                    metrics.record_failure(id, e.to_string());
                    continue;
                }
            };

            let parentheticals = result.parenthetical_count();
            let contexts = result.context_count();

            if self.config.dry_run {
                info!(
                    "DRY RUN: Would commit {} parentheticals and {} contexts for opinion {}",
                    parentheticals, contexts, id
                );
                continue;
            }

            match store.commit_relationships(id, &result.cited) {
                Ok(()) => {
                    info!(
                        "Committed opinion {}: {} parentheticals, {} contexts",
                        id, parentheticals, contexts
                    );
                    metrics.record_commit(parentheticals, contexts);
                }
                Err(e) => {
                    error!("Failed to commit opinion {}: {}", id, e);
                    metrics.record_failure(id, e.to_string());
                }
            }
        }

        metrics.total_runtime_ms = start.elapsed().as_millis() as u64;
        info!("{}", metrics.summary());
        Ok(metrics)
    }
}
