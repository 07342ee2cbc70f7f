//! Precedent Batch
//!
//! Runs citation context extraction over every stored opinion.
//!
//! # Overview
//!
//! The [`BatchDriver`] walks opinion ids in order and hands each one to the
//! extractor. Successful opinions are committed immediately; failed ones are
//! logged with their id and skipped, and the run carries on. The returned
//! [`BatchMetrics`] summarise the run but do not change its outcome.
//!
//! # Usage
//!
//! ```no_run
//! use precedent_batch::{BatchConfig, BatchDriver};
//! use precedent_extractor::ExtractorConfig;
//! use precedent_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("precedent.db")?;
//! let driver = BatchDriver::new(ExtractorConfig::default(), BatchConfig::default())?;
//!
//! let metrics = driver.run(&mut store)?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [batch]
//! dry_run = false
//! limit = 1000
//! start_after = 250
//! ```

#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod metrics;

pub use config::BatchConfig;
pub use driver::BatchDriver;
pub use error::BatchError;
pub use metrics::BatchMetrics;
