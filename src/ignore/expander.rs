//! Whole-tree expansion of nested ignore files

use crate::config::ExpandConfig;
use crate::core::error::Result;
use crate::core::paths::{posix_join, relative_dir};
use crate::ignore::finder::find_gitignore_files_with_config;
use crate::ignore::rewriter::parse_nested_gitignore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Patterns contributed by one nested ignore file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedFile {
    /// Path of the ignore file
    pub path: PathBuf,
    /// Its directory relative to the root, with forward slashes
    pub dir: String,
    /// Root-relative patterns in source order
    pub patterns: Vec<String>,
}

impl ExpandedFile {
    /// Path of the ignore file relative to the root, with forward slashes
    pub fn relative_path(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        posix_join(&[&self.dir, &name])
    }
}

/// Result of expanding every nested ignore file under a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub root: PathBuf,
    pub files: Vec<ExpandedFile>,
}

impl Expansion {
    /// All patterns, file by file, each file in source order
    pub fn patterns(&self) -> Vec<String> {
        self.files
            .iter()
            .flat_map(|file| file.patterns.iter().cloned())
            .collect()
    }

    /// Number of ignore files that contributed at least one pattern
    pub fn contributing_files(&self) -> usize {
        self.files.iter().filter(|f| !f.patterns.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.files.iter().all(|f| f.patterns.is_empty())
    }
}

/// Expand every nested `.gitignore` under `root` with default settings
pub fn expand_nested_gitignores(root: &Path) -> Result<Expansion> {
    expand_nested_gitignores_with_config(root, &ExpandConfig::default())
}

/// Find all ignore files under `root` and rewrite each one.
///
/// The root's own ignore file is listed with no patterns; consumers are
/// expected to apply it themselves.
pub fn expand_nested_gitignores_with_config(
    root: &Path,
    config: &ExpandConfig,
) -> Result<Expansion> {
    let mut files = Vec::new();

    for path in find_gitignore_files_with_config(root, config)? {
        let dir = relative_dir(&path, root)?;
        let patterns = parse_nested_gitignore(&path, root)?;
        files.push(ExpandedFile {
            path,
            dir,
            patterns,
        });
    }

    let expansion = Expansion {
        root: root.to_path_buf(),
        files,
    };
    info!(
        root = %root.display(),
        files = expansion.files.len(),
        contributing = expansion.contributing_files(),
        "expanded nested ignore files"
    );
    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn build_tree(root: &Path) -> anyhow::Result<()> {
        fs::write(root.join(".gitignore"), "dist/\n")?;
        fs::create_dir_all(root.join("packages").join("react"))?;
        fs::create_dir_all(root.join("packages").join("web"))?;
        fs::create_dir_all(root.join("node_modules").join("dep"))?;
        fs::write(
            root.join("packages").join("react").join(".gitignore"),
            "storybook-static/\n!storybook-static/keep.html\n",
        )?;
        fs::write(root.join("packages").join("web").join(".gitignore"), "/es\n*.map\n")?;
        fs::write(root.join("node_modules").join("dep").join(".gitignore"), "*\n")?;
        Ok(())
    }

    #[test]
    fn test_expands_all_nested_files() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        build_tree(root)?;

        let expansion = expand_nested_gitignores(root)?;

        assert_eq!(expansion.files.len(), 3);
        assert_eq!(expansion.contributing_files(), 2);
        assert_eq!(
            expansion.patterns(),
            vec![
                "packages/react/storybook-static/**",
                "!packages/react/storybook-static/keep.html",
                "packages/web/**/es",
                "packages/web/**/*.map",
            ]
        );

        let root_entry = expansion
            .files
            .iter()
            .find(|f| f.dir.is_empty())
            .expect("root ignore file listed");
        assert!(root_entry.patterns.is_empty());
        assert_eq!(root_entry.relative_path(), ".gitignore");

        let react = &expansion.files[1];
        assert_eq!(react.relative_path(), "packages/react/.gitignore");
        Ok(())
    }

    #[test]
    fn test_expansion_is_idempotent() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        build_tree(root)?;

        let first = expand_nested_gitignores(root)?;
        let second = expand_nested_gitignores(root)?;

        assert_eq!(first, second);
        assert_eq!(first.patterns().join("\n"), second.patterns().join("\n"));
        Ok(())
    }

    #[test]
    fn test_empty_tree() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let expansion = expand_nested_gitignores(temp_dir.path())?;

        assert!(expansion.is_empty());
        assert!(expansion.files.is_empty());
        Ok(())
    }
}
