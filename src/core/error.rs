//! Error types for nested gitignore expansion

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for expansion operations
#[derive(Error, Debug)]
pub enum ExpandError {
    /// Directory traversal failed (missing root, permission denied, ...)
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// An ignore file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ignore file {path} is not inside root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

impl ExpandError {
    /// Create a new read-file error
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a new walk error for the given path
    pub fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

/// Result type alias for expansion operations
pub type Result<T> = std::result::Result<T, ExpandError>;
