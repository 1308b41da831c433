//! Nested .gitignore expansion
//!
//! This module finds the `.gitignore` files of a directory tree and rewrites
//! the patterns of every nested one into root-relative globs. The resulting
//! flat list keeps gitignore precedence when applied in order with
//! last-match-wins semantics.

pub mod expander;
pub mod finder;
pub mod line;
pub mod matcher;
pub mod rewriter;

// Re-export commonly used items
pub use expander::{
    expand_nested_gitignores, expand_nested_gitignores_with_config, ExpandedFile, Expansion,
};
pub use finder::{find_gitignore_files, find_gitignore_files_with_config};
pub use line::{normalize_gitignore_line, GitignoreLine};
pub use matcher::{IgnoreList, IgnoreResult};
pub use rewriter::{parse_nested_gitignore, rewrite_content, rewrite_line};
