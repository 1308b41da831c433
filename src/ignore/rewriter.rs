//! Rewriting of nested .gitignore patterns into root-relative globs
//!
//! A pattern in `a/b/.gitignore` is only meaningful relative to `a/b`. The
//! rewriter prefixes every pattern with that directory so the result can sit
//! in a single flat ignore list next to patterns from other files:
//!
//! | line in `a/b/.gitignore` | root-relative pattern |
//! |--------------------------|-----------------------|
//! | `dist/`                  | `a/b/dist/**`         |
//! | `!dist/keep.js`          | `!a/b/dist/keep.js`   |
//! | `*.log`                  | `a/b/**/*.log`        |
//! | `foo/bar.js`             | `a/b/foo/bar.js`      |
//!
//! Pattern bodies are passed through as-is; glob characters inside them are
//! neither interpreted nor escaped.

use crate::core::error::{ExpandError, Result};
use crate::core::paths::{posix_join, relative_dir};
use crate::ignore::line::{normalize_gitignore_line, GitignoreLine};
use std::fs;
use std::path::Path;
use tracing::trace;

/// Rewrite the patterns of a nested `.gitignore` relative to `repo_root`.
///
/// A file directly inside the root yields no patterns and is not read.
/// Order follows the source lines, so a later `!` pattern still re-includes
/// what an earlier pattern excluded.
pub fn parse_nested_gitignore(gitignore_file: &Path, repo_root: &Path) -> Result<Vec<String>> {
    let dir_prefix = relative_dir(gitignore_file, repo_root)?;
    if dir_prefix.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = fs::read(gitignore_file).map_err(|e| ExpandError::read_file(gitignore_file, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let patterns = rewrite_content(&content, &dir_prefix);
    trace!(
        file = %gitignore_file.display(),
        count = patterns.len(),
        "rewrote nested ignore file"
    );
    Ok(patterns)
}

/// Rewrite every pattern line of `content` under `dir_prefix`
pub fn rewrite_content(content: &str, dir_prefix: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(normalize_gitignore_line)
        .map(|line| rewrite_line(&line, dir_prefix))
        .collect()
}

/// Rewrite a single normalized line under `dir_prefix`.
///
/// A leading `/` is dropped. A body that still contains a slash is joined
/// straight onto the prefix; a slash-free body may match at any depth and is
/// joined through `**`. Directory patterns get `**` appended.
pub fn rewrite_line(line: &GitignoreLine, dir_prefix: &str) -> String {
    let unanchored = line.line.strip_prefix('/').unwrap_or(&line.line);

    let base = if unanchored.contains('/') {
        posix_join(&[dir_prefix, unanchored])
    } else {
        posix_join(&[dir_prefix, "**", unanchored])
    };

    let pattern = if unanchored.ends_with('/') {
        format!("{}**", base)
    } else {
        base
    };

    if line.negated {
        format!("!{}", pattern)
    } else {
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_ignore(root: &Path, dir: &[&str], lines: &[&str]) -> anyhow::Result<std::path::PathBuf> {
        let nested = dir.iter().fold(root.to_path_buf(), |path, part| path.join(part));
        fs::create_dir_all(&nested)?;
        let file = nested.join(".gitignore");
        fs::write(&file, lines.join("\n"))?;
        Ok(file)
    }

    #[test]
    fn test_expands_anchors_negation_and_dirs() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let file = write_ignore(
            root,
            &["a", "b"],
            &[
                "# comment",
                "",
                "dist/",
                "!dist/keep.js",
                "/anchored.txt",
                "unanchored.txt",
                "foo/bar.js",
                "\\#literal",
                "\\!literal",
            ],
        )?;

        let patterns = parse_nested_gitignore(&file, root)?;

        assert_eq!(
            patterns,
            vec![
                "a/b/dist/**",
                "!a/b/dist/keep.js",
                "a/b/**/anchored.txt",
                "a/b/**/unanchored.txt",
                "a/b/foo/bar.js",
                "a/b/**/#literal",
                "a/b/**/!literal",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_anchored_patterns_relative_to_ignore_dir() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let file = write_ignore(root, &["packages", "ui"], &["/one.txt", "two.txt", "dir/"])?;

        let patterns = parse_nested_gitignore(&file, root)?;

        assert_eq!(
            patterns,
            vec![
                "packages/ui/**/one.txt",
                "packages/ui/**/two.txt",
                "packages/ui/dir/**",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_root_gitignore_yields_nothing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let file = write_ignore(root, &[], &["dist/", "*.log"])?;

        assert!(parse_nested_gitignore(&file, root)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_root_gitignore_is_not_read() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        // Does not exist: a read would fail
        let patterns = parse_nested_gitignore(&root.join(".gitignore"), root)?;
        assert!(patterns.is_empty());
        Ok(())
    }

    #[test]
    fn test_crlf_line_endings() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pkg"))?;
        let file = root.join("pkg").join(".gitignore");
        fs::write(&file, "build/\r\n!build/keep\r\n*.tmp\r\n")?;

        let patterns = parse_nested_gitignore(&file, root)?;

        assert_eq!(patterns, vec!["pkg/build/**", "!pkg/build/keep", "pkg/**/*.tmp"]);
        Ok(())
    }

    #[test]
    fn test_byte_order_mark_before_comment() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a"))?;
        let file = root.join("a").join(".gitignore");
        fs::write(&file, "\u{feff}# comment\nx\n")?;

        assert_eq!(parse_nested_gitignore(&file, root)?, vec!["a/**/x"]);
        Ok(())
    }

    #[test]
    fn test_glob_bodies_pass_through() {
        let patterns = rewrite_content("**/cache\nlogs/**/*.log\n[ab].txt\n", "x");
        assert_eq!(patterns, vec!["x/**/cache", "x/logs/**/*.log", "x/**/[ab].txt"]);
    }

    #[test]
    fn test_negated_directory_pattern() {
        let line = GitignoreLine::new("/vendor/", true);
        assert_eq!(rewrite_line(&line, "a"), "!a/vendor/**");
    }

    #[test]
    fn test_missing_nested_file_is_an_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        let result = parse_nested_gitignore(&root.join("sub").join(".gitignore"), root);
        assert!(matches!(result, Err(ExpandError::ReadFile { .. })));
        Ok(())
    }
}
