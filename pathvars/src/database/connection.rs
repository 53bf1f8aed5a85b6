//! Database connection management.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// An open variable database.
///
/// Connections use WAL journaling and the configured busy timeout so several
/// processes can share one database.
///
/// # Examples
///
/// ```no_run
/// use pathvars::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/pathvars.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens the database described by `config`, initializing the schema of
    /// a new file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDirectoryNotFound`] when the parent directory is
    /// missing and `auto_create` is off, [`Error::UnsupportedSchemaVersion`]
    /// for a database written by a different schema version, or an I/O or
    /// database error.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                if !config.auto_create {
                    return Err(Error::DataDirectoryNotFound {
                        path: parent.to_path_buf(),
                    });
                }
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        if config.read_only {
            let version = super::migrations::get_schema_version(&conn)?;
            if version != super::schema::CURRENT_SCHEMA_VERSION {
                return Err(Error::UnsupportedSchemaVersion {
                    expected: super::schema::CURRENT_SCHEMA_VERSION,
                    found: version,
                });
            }
        } else {
            // journal_mode reports the resulting mode as a row
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
            super::migrations::check_schema_compatibility(&conn)?;
        }

        log::debug!("opened variable database {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// The configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// The underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The underlying `SQLite` connection, mutably.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
