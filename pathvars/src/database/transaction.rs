//! Running variable operations inside a database transaction.

use std::collections::BTreeMap;
use std::sync::Arc;

use rusqlite::{Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::variable::{
    DescriptorRegistry, PathVariableManager, ProjectContext, SeededStore, VariableStore,
};

use super::connection::Database;

/// A [`VariableStore`] backed by the `variables` table of an open
/// connection or transaction.
#[derive(Debug, Clone, Copy)]
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Wraps `conn`. Writes go wherever `conn` points, so pass a
    /// transaction to make them atomic.
    #[must_use]
    pub const fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl VariableStore for SqliteStore<'_> {
    fn names(&self) -> Result<Vec<String>> {
        Database::list_variable_names(self.conn)
            .map_err(|e| Error::operation_failed("list variables", e))
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        Database::get_variable_value(self.conn, name)
            .map_err(|e| Error::operation_failed(format!("read variable '{name}'"), e))
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        Database::set_variable_simple(self.conn, name, value)
            .map_err(|e| Error::operation_failed(format!("store variable '{name}'"), e))
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        Database::delete_variable_simple(self.conn, name)
            .map_err(|e| Error::operation_failed(format!("remove variable '{name}'"), e))
    }
}

impl Database {
    /// Runs `f` against a [`PathVariableManager`] over this database inside
    /// one IMMEDIATE transaction, committing when `f` succeeds.
    ///
    /// The write lock is taken up front, so a relativization that derives a
    /// new variable cannot race another process deriving the same one. When
    /// `f` fails nothing it wrote is kept.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be
    /// started or committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use pathvars::database::{Database, DatabaseConfig};
    /// use pathvars::variable::{DescriptorRegistry, ProjectContext};
    /// use pathvars::{Relativizer, VariablePath};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/pathvars.db")).unwrap();
    /// let target = VariablePath::from_portable_string("/srv/src/lib/util.c");
    /// let relative = db
    ///     .with_variables(
    ///         Arc::new(DescriptorRegistry::builtin()),
    ///         ProjectContext::default(),
    ///         |vars| Relativizer::default().to_relative(vars, &target, true, None),
    ///     )
    ///     .unwrap();
    /// println!("{relative}");
    /// ```
    pub fn with_variables<T, F>(
        &mut self,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SqliteStore<'_>>) -> Result<T>,
    {
        self.run_in_transaction(TransactionBehavior::Immediate, registry, context, f)
    }

    /// Like [`Database::with_variables`] but starts a deferred transaction,
    /// which also works on a read-only database. Any write `f` attempts
    /// upgrades the lock at that point.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be
    /// started or committed.
    pub fn view_variables<T, F>(
        &mut self,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SqliteStore<'_>>) -> Result<T>,
    {
        self.run_in_transaction(TransactionBehavior::Deferred, registry, context, f)
    }

    /// Like [`Database::with_variables`], with `seed` visible beneath the
    /// stored variables. Seeded values are never written to the database.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be
    /// started or committed.
    pub fn with_seeded_variables<T, F>(
        &mut self,
        seed: &BTreeMap<String, String>,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SeededStore<'_, SqliteStore<'_>>>) -> Result<T>,
    {
        self.run_seeded(TransactionBehavior::Immediate, seed, registry, context, f)
    }

    /// Like [`Database::view_variables`], with `seed` visible beneath the
    /// stored variables.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be
    /// started or committed.
    pub fn view_seeded_variables<T, F>(
        &mut self,
        seed: &BTreeMap<String, String>,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SeededStore<'_, SqliteStore<'_>>>) -> Result<T>,
    {
        self.run_seeded(TransactionBehavior::Deferred, seed, registry, context, f)
    }

    fn run_seeded<T, F>(
        &mut self,
        behavior: TransactionBehavior,
        seed: &BTreeMap<String, String>,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SeededStore<'_, SqliteStore<'_>>>) -> Result<T>,
    {
        let tx = self.conn.transaction_with_behavior(behavior)?;
        let result = {
            let store = SeededStore::new(seed, SqliteStore::new(&tx));
            let mut manager = PathVariableManager::new(store, registry, context);
            f(&mut manager)?
        };
        tx.commit()?;
        Ok(result)
    }

    fn run_in_transaction<T, F>(
        &mut self,
        behavior: TransactionBehavior,
        registry: Arc<DescriptorRegistry>,
        context: ProjectContext,
        f: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut PathVariableManager<SqliteStore<'_>>) -> Result<T>,
    {
        let tx = self.conn.transaction_with_behavior(behavior)?;
        let result = {
            let mut manager = PathVariableManager::new(SqliteStore::new(&tx), registry, context);
            f(&mut manager)?
        };
        tx.commit()?;
        Ok(result)
    }
}
