//! Configuration for the expander
//!
//! Settings live in an optional `gitignore-expand.toml` at the tree root.

pub mod expand_config;

// Re-export commonly used items
pub use expand_config::{ExpandConfig, CONFIG_FILE_NAME};
