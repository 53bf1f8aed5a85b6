//! `SQLite` persistence for user-defined path variables.
//!
//! Variables live in a `variables` table keyed by name, with the value stored
//! as a portable path string. [`Database::with_variables`] exposes the table
//! as a [`PathVariableManager`](crate::variable::PathVariableManager) inside
//! one IMMEDIATE transaction.
//!
//! # Examples
//!
//! ```no_run
//! use pathvars::database::{resolve_database_path, Database, DatabaseConfig};
//! use pathvars::VariablePath;
//!
//! let mut db = Database::open(DatabaseConfig::new(resolve_database_path())).unwrap();
//! db.set_variable("SRC", &VariablePath::from_portable_string("/srv/src")).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    database_path_in, default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig,
    DATABASE_FILE, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use operations::VariableRecord;
pub use schema::CURRENT_SCHEMA_VERSION;
pub use transaction::SqliteStore;
