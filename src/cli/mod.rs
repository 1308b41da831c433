//! Command-line interface for gitignore-expand

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// gitignore-expand - flatten nested .gitignore files into root-relative globs
#[derive(Parser)]
#[command(
    name = "gitignore-expand",
    version,
    about = "Expand nested .gitignore files into root-relative glob patterns",
    long_about = "Walks a directory tree, collects every nested .gitignore and rewrites its patterns relative to the tree root, ready for a flat lint/build ignore list."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a gitignore-expand.toml config file
    #[arg(long, global = true, env = "GITIGNORE_EXPAND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the expanded patterns of all nested ignore files
    Expand {
        /// Tree root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Group patterns by source file
        #[arg(long)]
        by_file: bool,
    },

    /// List the ignore files found under the root
    Find {
        /// Tree root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check root-relative paths against the expanded patterns
    Check {
        /// Tree root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Paths relative to the root
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
