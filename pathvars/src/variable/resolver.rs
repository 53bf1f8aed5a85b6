//! The resolver seam between the relativizer and variable storage.

use crate::error::Result;
use crate::path::VariablePath;

/// Lists, looks up, resolves and defines path variables.
///
/// The relativizer only reads through this trait, with one exception: a
/// forced conversion that finds no reusable parent variable defines exactly
/// one through [`define_derived_variable`](Self::define_derived_variable).
///
/// Implementations report storage failures as
/// [`Error::OperationFailed`](crate::Error::OperationFailed).
#[cfg_attr(test, mockall::automock)]
pub trait PathVariableResolver {
    /// Names of all variables, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn variable_names(&self) -> Result<Vec<String>>;

    /// Whether `name` is bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn is_defined(&self, name: &str) -> Result<bool>;

    /// The raw value of `name`, possibly itself containing a variable
    /// reference. `Ok(None)` when the variable is not bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn value(&self, name: &str) -> Result<Option<VariablePath>>;

    /// Expand a leading variable reference in `path`.
    ///
    /// Absolute paths and paths whose head is not a variable are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or references nest too
    /// deeply.
    fn resolve_path(&self, path: &VariablePath) -> Result<VariablePath>;

    /// Bind `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or read-only, or the store
    /// cannot be written.
    fn set_value(&mut self, name: &str, value: &VariablePath) -> Result<()>;

    /// Bind a parent-derived variable created by the relativizer.
    ///
    /// # Errors
    ///
    /// As for [`set_value`](Self::set_value).
    fn define_derived_variable(&mut self, name: &str, value: &VariablePath) -> Result<()> {
        self.set_value(name, value)
    }
}
