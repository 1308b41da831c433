//! gitignore-expand CLI
//!
//! Command-line interface for expanding nested .gitignore files.

use anyhow::Result;
use clap::Parser;
use nested_gitignore::cli::{commands, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived level
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Expand {
            root,
            json,
            by_file,
        } => commands::expand::execute(root, json, by_file, config),
        Commands::Find { root, json } => commands::find::execute(root, json, config),
        Commands::Check { root, paths, json } => {
            commands::check::execute(root, paths, json, config)
        },
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
