//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use precedent_domain::traits::OpinionStore;
use precedent_domain::OpinionId;
use precedent_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = SqliteStore::new(&config.database_path)?;
    let citing = OpinionId::new(args.opinion_id);

    store.require_opinion(citing)?;
    let parentheticals = store.parentheticals_from(citing)?;
    let contexts = store.contexts_from(citing)?;

    println!(
        "{}",
        formatter.format_relationships(citing, &parentheticals, &contexts)?
    );
    Ok(())
}
