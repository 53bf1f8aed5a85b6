//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path normalization, configuration loading and database access.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use pathvars::database::{self, database_path_in};
use pathvars::path::normalize;
use pathvars::{Config, ConfigBuilder, Database, DatabaseConfig, DescriptorRegistry, VariablePath};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// The data directory: the global option, else `$PATHVARS_DATA_DIR`, else
/// `~/.pathvars`.
pub fn resolve_data_dir(global: &GlobalOptions) -> PathBuf {
    global
        .data_dir
        .clone()
        .unwrap_or_else(database::resolve_data_dir)
}

/// Normalize a filesystem path: expand `~`, make it absolute against the
/// current directory and collapse `.` and `..`. Symlinks are not followed, so
/// the path need not exist.
pub fn normalize_path(path: &Path) -> Result<VariablePath, CliError> {
    normalize::normalize(path).map_err(CliError::from)
}

/// Parse a path argument that may start with a variable reference.
///
/// Arguments starting with a `${NAME}` macro are kept as given; anything
/// else is normalized as a filesystem path.
pub fn parse_path_argument(raw: &str) -> Result<VariablePath, CliError> {
    if raw.starts_with("${") {
        Ok(VariablePath::from_portable_string(raw))
    } else {
        normalize_path(Path::new(raw))
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project files (`pathvars.local.yaml`, then `pathvars.yaml`)
/// 3. User configuration in the data directory
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global);
    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the variable database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = database_path_in(&resolve_data_dir(global));
    let disable_autoinit = global.disable_autoinit || config.disable_autoinit == Some(true);

    if !db_path.exists() && disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);
    if disable_autoinit {
        db_config = db_config.without_auto_create();
    }

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// The builtin descriptor registry.
pub fn registry() -> Arc<DescriptorRegistry> {
    Arc::new(DescriptorRegistry::builtin())
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
