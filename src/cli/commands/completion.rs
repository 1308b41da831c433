use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

/// Generate shell completion scripts
///
/// The script goes to stdout; instructions go to stderr so the output can be
/// piped straight into a file.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = "gitignore-expand";

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    eprintln!("\n{}", "Installation Instructions:".bold());

    match shell {
        Shell::Bash => {
            eprintln!("  Add the following to your ~/.bashrc or ~/.bash_profile:");
            eprintln!("  {}", "eval \"$(gitignore-expand completion bash)\"".cyan());
        },
        Shell::Zsh => {
            eprintln!("  Save the script to a file in your fpath:");
            eprintln!(
                "  {}",
                "gitignore-expand completion zsh > ~/.local/share/zsh/site-functions/_gitignore-expand"
                    .cyan()
            );
        },
        Shell::Fish => {
            eprintln!("  Save the completion script:");
            eprintln!(
                "  {}",
                "gitignore-expand completion fish > ~/.config/fish/completions/gitignore-expand.fish"
                    .cyan()
            );
        },
        Shell::PowerShell => {
            eprintln!("  Add the following to your PowerShell profile:");
            eprintln!(
                "  {}",
                "Invoke-Expression (& gitignore-expand completion powershell)".cyan()
            );
        },
        _ => {
            eprintln!(
                "  Please refer to your shell's documentation for installing completion scripts."
            );
        },
    }

    Ok(())
}
