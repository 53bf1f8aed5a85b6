//! Shared helpers for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};

/// Opens a fresh database in a temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("test.db"));
    let db = Database::open(config).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}
