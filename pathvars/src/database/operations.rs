//! CRUD operations on stored variables.
//!
//! Read operations and the `_simple` write variants take a [`Connection`], so
//! they work on a plain connection and inside an open transaction alike. The
//! `&mut self` writers wrap a single change in their own IMMEDIATE
//! transaction.

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::path::VariablePath;
use crate::variable::name::is_valid_variable_name;

use super::connection::Database;
use super::schema::{
    DELETE_VARIABLE, LIST_VARIABLES, LIST_VARIABLE_NAMES, SELECT_VARIABLE, SELECT_VARIABLE_VALUE,
    UPSERT_VARIABLE,
};

/// A stored variable with its bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    /// Variable name.
    pub name: String,
    /// Stored value, possibly itself a variable reference.
    pub value: VariablePath,
    /// When the variable was first defined.
    pub created_at: SystemTime,
    /// When the value last changed.
    pub updated_at: SystemTime,
}

#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}

/// Expects columns: name, value, `created_at`, `updated_at`.
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<VariableRecord> {
    let value: String = row.get(1)?;
    Ok(VariableRecord {
        name: row.get(0)?,
        value: VariablePath::from_portable_string(&value),
        created_at: unix_secs_to_systemtime(row.get(2)?),
        updated_at: unix_secs_to_systemtime(row.get(3)?),
    })
}

fn check_name(name: &str) -> Result<()> {
    if is_valid_variable_name(name) {
        Ok(())
    } else {
        Err(Error::Validation {
            field: "name".into(),
            message: format!("'{name}' is not a valid variable name"),
        })
    }
}

impl Database {
    /// All stored variables, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathvars::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/pathvars.db")).unwrap();
    /// for record in Database::list_variables(db.connection()).unwrap() {
    ///     println!("{} = {}", record.name, record.value);
    /// }
    /// ```
    pub fn list_variables(conn: &Connection) -> Result<Vec<VariableRecord>> {
        let mut stmt = conn.prepare(LIST_VARIABLES)?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// All stored variable names, ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_variable_names(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(LIST_VARIABLE_NAMES)?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// The stored variable `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails for any reason other than a
    /// missing row.
    pub fn get_variable(conn: &Connection, name: &str) -> Result<Option<VariableRecord>> {
        match conn.query_row(SELECT_VARIABLE, [name], row_to_record) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The raw portable value of `name`, if stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails for any reason other than a
    /// missing row.
    pub fn get_variable_value(conn: &Connection, name: &str) -> Result<Option<String>> {
        match conn.query_row(SELECT_VARIABLE_VALUE, [name], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts or replaces `name` using an existing connection or
    /// transaction. The creation time of an existing variable is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid name, or an error if the
    /// write fails.
    pub fn set_variable_simple(conn: &Connection, name: &str, value: &str) -> Result<()> {
        check_name(name)?;
        let now = systemtime_to_unix_secs(SystemTime::now())?;
        conn.execute(UPSERT_VARIABLE, params![name, value, now])?;
        Ok(())
    }

    /// Deletes `name` using an existing connection or transaction, returning
    /// whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_variable_simple(conn: &Connection, name: &str) -> Result<bool> {
        Ok(conn.execute(DELETE_VARIABLE, [name])? > 0)
    }

    /// Inserts or replaces `name` in its own IMMEDIATE transaction.
    ///
    /// This stores the value as given. Read-only checks against the
    /// descriptor registry happen in
    /// [`PathVariableManager`](crate::variable::PathVariableManager); use
    /// [`Database::with_variables`] to go through it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid name, or an error if the
    /// transaction fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathvars::database::{Database, DatabaseConfig};
    /// use pathvars::VariablePath;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/pathvars.db")).unwrap();
    /// db.set_variable("SRC", &VariablePath::from_portable_string("/srv/src")).unwrap();
    /// ```
    pub fn set_variable(&mut self, name: &str, value: &VariablePath) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Self::set_variable_simple(&tx, name, &value.to_portable_string())?;
        tx.commit()?;
        Ok(())
    }

    /// Deletes `name` in its own IMMEDIATE transaction, returning whether it
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn delete_variable(&mut self, name: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let deleted = Self::delete_variable_simple(&tx, name)?;
        tx.commit()?;
        Ok(deleted)
    }
}
