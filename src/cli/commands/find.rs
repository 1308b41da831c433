use crate::cli::commands::load_config;
use crate::ignore::find_gitignore_files_with_config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// List discovered ignore files
pub fn execute(root: PathBuf, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(&root, config)?;
    let files = find_gitignore_files_with_config(&root, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in &files {
            println!("{}", file.display());
        }
    }

    Ok(())
}
