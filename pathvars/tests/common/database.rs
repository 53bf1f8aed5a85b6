//! Shared database test utilities.

use std::path::PathBuf;

use pathvars::database::{Database, DatabaseConfig};
use tempfile::TempDir;

/// Opens a fresh database in a new temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the length of the test.
#[allow(dead_code)]
pub fn create_test_database() -> (TempDir, PathBuf, Database) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pathvars.db");
    let db = Database::open(DatabaseConfig::new(&path)).unwrap();
    (dir, path, db)
}
