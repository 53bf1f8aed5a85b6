//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `define`: Define or replace a path variable
//! - `remove`: Remove a path variable
//! - `list`: List variables with their values and locations
//! - `resolve`: Resolve a variable-relative path
//! - `relativize`: Express an absolute path through a variable
//! - `export`: Print resolved variables for a shell or as JSON/dotenv
//! - `validate`: Validate a configuration file
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod define;
pub mod export;
pub mod init;
pub mod list;
pub mod relativize;
pub mod remove;
pub mod resolve;
pub mod show_data_dir;
pub mod validate;

pub use completions::CompletionsCommand;
pub use define::DefineCommand;
pub use export::ExportCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use relativize::RelativizeCommand;
pub use remove::RemoveCommand;
pub use resolve::ResolveCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use validate::ValidateCommand;
