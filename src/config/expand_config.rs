//! Expansion configuration
//!
//! Loaded from `gitignore-expand.toml` in the tree root, or from an explicit
//! path. Missing files fall back to defaults.

use crate::core::error::{ExpandError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the optional config file looked up in the tree root
pub const CONFIG_FILE_NAME: &str = "gitignore-expand.toml";

/// Settings for the walker and the rewriter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandConfig {
    /// File name treated as an ignore file
    pub ignore_file_name: String,
    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            ignore_file_name: ".gitignore".to_string(),
            skip_dirs: vec![".git".to_string(), "node_modules".to_string()],
        }
    }
}

impl ExpandConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ExpandError::configuration(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ExpandError::read_file(path, e))?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content)
    }

    /// Load `gitignore-expand.toml` from the root if it exists, defaults otherwise
    pub fn discover(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Location of the config file for a given root
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Whether a directory with this name should be skipped
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|dir| dir == name)
    }

    fn validate(&self) -> Result<()> {
        if self.ignore_file_name.is_empty() {
            return Err(ExpandError::configuration("ignore_file_name must not be empty"));
        }
        if self.ignore_file_name.contains('/') || self.ignore_file_name.contains('\\') {
            return Err(ExpandError::configuration(format!(
                "ignore_file_name must be a bare file name, got {:?}",
                self.ignore_file_name
            )));
        }
        Ok(())
    }
}
