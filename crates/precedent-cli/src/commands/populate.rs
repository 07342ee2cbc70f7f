//! Populate command implementation.

use crate::cli::PopulateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use precedent_batch::{BatchDriver, BatchMetrics};
use precedent_store::SqliteStore;
use tracing::info;

/// Execute the populate command.
pub fn execute_populate(args: PopulateArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    let metrics = populate(&args, config)?;
    println!("{}", formatter.format_metrics(&metrics, config.batch.dry_run)?);
    Ok(())
}

/// Apply the flags, then run one batch over the configured database.
pub fn populate(args: &PopulateArgs, config: &mut Config) -> Result<BatchMetrics> {
    args.apply(config);
    config.validate()?;

    info!("Opening database {}", config.database_path.display());
    let mut store = SqliteStore::new(&config.database_path)?;
    let driver = BatchDriver::new(config.extractor.clone(), config.batch.clone())?;
    Ok(driver.run(&mut store)?)
}
