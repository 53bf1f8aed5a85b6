//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathvars";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            print_install_hint(self.shell);
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    match shell {
        Shell::Bash => {
            eprintln!(
                "#   pathvars completions bash > ~/.local/share/bash-completion/completions/pathvars"
            );
            eprintln!("# Or add to ~/.bashrc:");
            eprintln!("#   eval \"$(pathvars completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   pathvars completions zsh > ~/.zsh/completions/_pathvars");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   pathvars completions fish > ~/.config/fish/completions/pathvars.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   pathvars completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }
    eprintln!();
}
