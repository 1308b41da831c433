//! Path helpers shared by the walker and the rewriter
//!
//! Expanded patterns always use `/` as separator regardless of platform, so
//! everything that turns a filesystem path into pattern text goes through here.

use crate::core::error::{ExpandError, Result};
use path_clean::PathClean;
use std::path::{Path, MAIN_SEPARATOR};

/// Convert platform separators to forward slashes.
///
/// On Unix this is the identity: a backslash is a legal filename character
/// there and must survive untouched.
pub fn normalize_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(MAIN_SEPARATOR, "/")
    }
}

/// Join pattern segments with `/` and normalize the result.
///
/// Empty segments are dropped, `.` segments removed, `..` folded into the
/// preceding segment and repeated slashes collapsed. A trailing slash on the
/// joined text is kept since it marks a directory-only pattern.
pub fn posix_join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return ".".to_string();
    }

    let absolute = joined.starts_with('/');
    let trailing = joined.ends_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            },
            other => parts.push(other),
        }
    }

    let mut result = parts.join("/");
    if result.is_empty() && !absolute {
        result.push('.');
    }
    if trailing && !result.is_empty() {
        result.push('/');
    }
    if absolute {
        result.insert(0, '/');
    }
    result
}

/// Directory of `ignore_file` relative to `root`, with forward slashes.
///
/// Returns an empty string for a file directly inside the root. Both paths
/// are cleaned first; cleaning drops the `./` of paths under a `.` root, so
/// that root is matched against any relative path that stays inside it.
pub fn relative_dir(ignore_file: &Path, root: &Path) -> Result<String> {
    let root = root.to_path_buf().clean();
    let dir = ignore_file
        .parent()
        .map(|p| p.to_path_buf().clean())
        .unwrap_or_else(|| root.clone());

    let outside_root = || ExpandError::OutsideRoot {
        path: ignore_file.to_path_buf(),
        root: root.clone(),
    };

    let relative = if dir == root {
        Path::new("")
    } else if root == Path::new(".") {
        if dir.is_absolute() || dir.starts_with("..") {
            return Err(outside_root());
        }
        dir.as_path()
    } else {
        dir.strip_prefix(&root).map_err(|_| outside_root())?
    };

    Ok(normalize_path(relative))
}
