//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    CompletionsCommand, DefineCommand, ExportCommand, InitCommand, ListCommand,
    RelativizeCommand, RemoveCommand, ResolveCommand, ShowDataDirCommand, ValidateCommand,
};

/// Command-line tool for managing path variables.
#[derive(Parser)]
#[command(name = "pathvars")]
#[command(
    version,
    about = "Express filesystem paths relative to named path variables",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PATHVARS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "PATHVARS_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "PATHVARS_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Define or replace a path variable
    Define(DefineCommand),

    /// Remove a path variable
    Remove(RemoveCommand),

    /// List path variables
    List(ListCommand),

    /// Resolve a variable-relative path to an absolute path
    Resolve(ResolveCommand),

    /// Express an absolute path relative to a path variable
    Relativize(RelativizeCommand),

    /// Print resolved variables as shell exports, JSON or dotenv
    Export(ExportCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
