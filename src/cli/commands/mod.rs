//! CLI command implementations

pub mod check;
pub mod completion;
pub mod expand;
pub mod find;

// Common utilities for commands
use crate::config::ExpandConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Resolve the config: an explicit file wins, then the root's own config file
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ExpandConfig> {
    match explicit {
        Some(path) => ExpandConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => ExpandConfig::discover(root)
            .with_context(|| format!("loading config for {}", root.display())),
    }
}
