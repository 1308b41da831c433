//! Nested Gitignore - flat ignore lists from nested .gitignore files
//!
//! Lint and build tools usually accept a single list of ignore globs relative
//! to the project root, while repositories keep `.gitignore` files at many
//! levels. This crate walks a tree, collects every nested `.gitignore` and
//! rewrites its patterns so they mean the same thing from the root.
//!
//! # Core Features
//!
//! - **Discovery**: iterative walk that skips `.git`, `node_modules` and symlinks
//! - **Normalization**: comments, blanks, `\#`/`\!` escapes and `!` negation
//! - **Rewriting**: anchored, slash-containing and directory-only patterns
//! - **Matching**: last-match-wins evaluation of the expanded list
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use nested_gitignore::expand_nested_gitignores;
//! use std::path::Path;
//!
//! let expansion = expand_nested_gitignores(Path::new("."))?;
//! for pattern in expansion.patterns() {
//!     println!("{}", pattern);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod ignore;

// Re-export commonly used types
pub use crate::core::{
    error::{ExpandError, Result},
    paths::normalize_path,
};

pub use config::ExpandConfig;

pub use ignore::{
    expand_nested_gitignores, expand_nested_gitignores_with_config, find_gitignore_files,
    find_gitignore_files_with_config, normalize_gitignore_line, parse_nested_gitignore,
    ExpandedFile, Expansion, GitignoreLine, IgnoreList, IgnoreResult,
};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
