//! Discovery of ignore files in a directory tree

use crate::config::ExpandConfig;
use crate::core::error::{ExpandError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Find every `.gitignore` reachable from `root`.
///
/// Skips `.git` and `node_modules` and never follows symbolic links.
pub fn find_gitignore_files(root: &Path) -> Result<Vec<PathBuf>> {
    find_gitignore_files_with_config(root, &ExpandConfig::default())
}

/// Find every ignore file reachable from `root` using the given settings.
///
/// The walk is iterative, so tree depth never grows the call stack. Entries
/// are visited in file-name order, which keeps the result stable between
/// runs. Any error reading a directory aborts the whole walk.
pub fn find_gitignore_files_with_config(
    root: &Path,
    config: &ExpandConfig,
) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).map_err(|e| ExpandError::read_file(root, e))?;
    if !metadata.is_dir() {
        return Err(ExpandError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            ExpandError::walk(path, e)
        })?;
        let name = entry.file_name().to_string_lossy();

        if name == config.ignore_file_name {
            debug!(path = %entry.path().display(), "found ignore file");
            found.push(entry.path().to_path_buf());
            if entry.file_type().is_dir() {
                entries.skip_current_dir();
            }
            continue;
        }

        // follow_links(false) already reports linked directories as links
        if entry.path_is_symlink() {
            trace!(path = %entry.path().display(), "skipping symlink");
            continue;
        }

        if entry.file_type().is_dir() && config.is_skipped_dir(&name) {
            debug!(path = %entry.path().display(), "skipping directory");
            entries.skip_current_dir();
        }
    }

    Ok(found)
}
