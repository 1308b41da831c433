//! Core error handling and path utilities
//!
//! This module contains the error type and the path helpers used
//! throughout the walker and the rewriter.

pub mod error;
pub mod paths;

// Re-export commonly used items
pub use error::{ExpandError, Result};
pub use paths::{normalize_path, posix_join, relative_dir};
