//! Precedent CLI - Extract citation contexts from court opinions.

use clap::Parser;
use precedent_cli::cli::PopulateArgs;
use precedent_cli::commands;
use precedent_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` unless `--verbose` was given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> precedent_cli::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None => commands::execute_populate(PopulateArgs::default(), &mut config, &formatter)?,
        Some(Command::Populate(args)) => commands::execute_populate(args, &mut config, &formatter)?,
        Some(Command::Show(args)) => commands::execute_show(args, &config, &formatter)?,
        Some(Command::Graph(args)) => commands::execute_graph(args, &mut config, &formatter)?,
    }

    Ok(())
}
