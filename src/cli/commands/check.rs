use crate::cli::commands::load_config;
use crate::ignore::{expand_nested_gitignores_with_config, IgnoreList, IgnoreResult};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Check paths against the expanded nested patterns
pub fn execute(root: PathBuf, paths: Vec<String>, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(&root, config)?;
    let expansion = expand_nested_gitignores_with_config(&root, &config)?;
    let list = IgnoreList::new(expansion.patterns())?;
    if list.is_empty() {
        warn!(root = %root.display(), "no nested ignore patterns found");
    } else {
        debug!(patterns = list.len(), "compiled ignore list");
    }

    if json {
        let results: Vec<_> = paths
            .iter()
            .map(|path| json!({ "path": path, "result": list.check(path) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for path in &paths {
        match list.check(path) {
            IgnoreResult::Included => println!("{} {}", "included".green(), path),
            IgnoreResult::Ignored(pattern) => {
                println!("{} {} ({})", "ignored ".red(), path, pattern.dimmed())
            },
            IgnoreResult::IncludedByNegation(pattern) => {
                println!("{} {} ({})", "included".green(), path, pattern.dimmed())
            },
        }
    }

    Ok(())
}
