//! Database configuration and data directory resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PATHVARS_DATA_DIR";

/// File name of the variable database inside the data directory.
pub const DATABASE_FILE: &str = "pathvars.db";

/// Configuration for opening a [`Database`](super::Database).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,

    /// How long to wait on a locked database before failing.
    pub busy_timeout: Duration,

    /// Whether to create the file and its parent directory when missing.
    pub auto_create: bool,

    /// Whether to open the database read-only.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Configuration with defaults: 5 second busy timeout, auto-create,
    /// read-write.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/pathvars.db");
    /// assert!(config.auto_create);
    /// assert!(!config.read_only);
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creating a missing database.
    #[must_use]
    pub const fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Opens the database read-only. Implies no auto-create.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// The default data directory, `~/.pathvars`.
///
/// Falls back to `./.pathvars` when no home directory is known.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pathvars")
}

/// The data directory: `$PATHVARS_DATA_DIR` if set, otherwise
/// [`default_data_dir`].
#[must_use]
pub fn resolve_data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map_or_else(default_data_dir, PathBuf::from)
}

/// The database file inside `data_dir`.
#[must_use]
pub fn database_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILE)
}

/// The database file inside the resolved data directory.
#[must_use]
pub fn resolve_database_path() -> PathBuf {
    database_path_in(&resolve_data_dir())
}
