//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the pathvars data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Parser;
use pathvars::config::loader::USER_CONFIG_FILE;
use pathvars::database::database_path_in;
use pathvars::{Database, DatabaseConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Default contents of `config.yaml` written by `init --with-config`.
const DEFAULT_CONFIG: &str = "\
# pathvars user configuration
#
# workspace_location: /home/me/workspace
# project:
#   name: app
#   location: /home/me/workspace/app
# variables:
#   SRC: /home/me/src
case_sensitivity: platform
force: false
";

/// Initialize pathvars data directory and database.
#[derive(Parser)]
#[command(about = "Initialize pathvars data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here. The command's own `--data-dir`
    /// names where to create, taking precedence over the global one.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| resolve_data_dir(global));
        let db_path = database_path_in(&data_dir);
        let config_path = data_dir.join(USER_CONFIG_FILE);

        if self.dry_run {
            self.print_plan(&data_dir, &db_path, &config_path);
            return Ok(());
        }

        if db_path.exists() && !self.overwrite {
            return Err(CliError::InvalidArguments(format!(
                "Database already exists (use --overwrite to replace): {}",
                db_path.display()
            )));
        }

        let data_dir_created = !data_dir.exists();
        fs::create_dir_all(&data_dir)?;

        let database_existed = db_path.exists();
        if database_existed {
            remove_database_files(&db_path)?;
        }
        Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        let config_created = self.with_config && !config_path.exists();
        if config_created {
            fs::write(&config_path, DEFAULT_CONFIG)?;
        }

        if global.quiet {
            return Ok(());
        }

        println!("Initialized pathvars in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_existed {
            println!("  - Recreated database");
        } else {
            println!("  - Created database");
        }
        if config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }

    fn print_plan(&self, data_dir: &Path, db_path: &Path, config_path: &Path) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize pathvars in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        if !db_path.exists() {
            println!("  - Create database: {}", db_path.display());
        } else if self.overwrite {
            println!("  - Remove existing database: {}", db_path.display());
            println!("  - Create new database: {}", db_path.display());
        } else {
            println!(
                "  - ERROR: Database already exists (use --overwrite to replace): {}",
                db_path.display()
            );
        }

        if self.with_config {
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}

/// Remove the database file and its WAL side files.
fn remove_database_files(db_path: &Path) -> Result<(), CliError> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = db_path.as_os_str().to_os_string();
        side.push(suffix);
        let side = PathBuf::from(side);
        if side.exists() {
            fs::remove_file(side)?;
        }
    }
    Ok(())
}
