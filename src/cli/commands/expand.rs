use crate::cli::commands::load_config;
use crate::ignore::expand_nested_gitignores_with_config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Print the expanded patterns
pub fn execute(root: PathBuf, json: bool, by_file: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(&root, config)?;
    let expansion = expand_nested_gitignores_with_config(&root, &config)?;

    match (json, by_file) {
        (true, true) => println!("{}", serde_json::to_string_pretty(&expansion)?),
        (true, false) => println!("{}", serde_json::to_string_pretty(&expansion.patterns())?),
        (false, true) => {
            for file in expansion.files.iter().filter(|f| !f.patterns.is_empty()) {
                println!("# {}", file.relative_path());
                for pattern in &file.patterns {
                    println!("{}", pattern);
                }
            }
        },
        (false, false) => {
            for pattern in expansion.patterns() {
                println!("{}", pattern);
            }
        },
    }

    Ok(())
}
