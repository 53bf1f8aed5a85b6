//! Variable storage and the standard resolver.
//!
//! [`PathVariableManager`] layers the descriptor registry and the
//! [`ProjectContext`] over a [`VariableStore`] holding user-defined values,
//! and implements [`PathVariableResolver`] on top of them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::path::VariablePath;
use crate::variable::name::is_valid_variable_name;
use crate::variable::parent::{
    is_parent_variable, macro_string, parent_variable_argument, parent_variable_count,
    strip_macro,
};
use crate::variable::{DescriptorRegistry, PathVariable, PathVariableResolver, ProjectContext};

/// How many variable references may nest during one resolution.
pub const MAX_RESOLVE_DEPTH: usize = 32;

/// Raw storage for user-defined variables: name to portable path string.
pub trait VariableStore {
    /// All stored names, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn names(&self) -> Result<Vec<String>>;

    /// The stored value of `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, name: &str) -> Result<Option<String>>;

    /// Insert or replace `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    /// Remove `name`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn remove(&mut self, name: &str) -> Result<bool>;
}

/// An in-memory [`VariableStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    variables: BTreeMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored name/value pairs.
    #[must_use]
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

impl From<BTreeMap<String, String>> for MemoryStore {
    fn from(variables: BTreeMap<String, String>) -> Self {
        Self { variables }
    }
}

impl VariableStore for MemoryStore {
    fn names(&self) -> Result<Vec<String>> {
        Ok(self.variables.keys().cloned().collect())
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.variables.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.variables.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        Ok(self.variables.remove(name).is_some())
    }
}

/// A [`VariableStore`] that shows fixed seed values beneath an inner store.
///
/// Reads prefer the inner store and fall back to the seed. Writes and
/// removals only touch the inner store, so removing a name that is also
/// seeded leaves the seeded value visible.
#[derive(Debug, Clone)]
pub struct SeededStore<'seed, S> {
    seed: &'seed BTreeMap<String, String>,
    inner: S,
}

impl<'seed, S: VariableStore> SeededStore<'seed, S> {
    /// Layer `inner` over `seed`.
    #[must_use]
    pub fn new(seed: &'seed BTreeMap<String, String>, inner: S) -> Self {
        Self { seed, inner }
    }

    /// The inner store.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: VariableStore> VariableStore for SeededStore<'_, S> {
    fn names(&self) -> Result<Vec<String>> {
        let mut names = self.inner.names()?;
        names.extend(self.seed.keys().cloned());
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        match self.inner.get(name)? {
            Some(value) => Ok(Some(value)),
            None => Ok(self.seed.get(name).cloned()),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.inner.set(name, value)
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        self.inner.remove(name)
    }
}

/// The standard [`PathVariableResolver`].
///
/// Lookup order for a name: a registered descriptor, then the store, then
/// the `PARENT-<N>-<base>` grammar. The value of `PARENT-2-SRC` is
/// `${SRC}/../..`, which resolution collapses.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathvars::path::VariablePath;
/// use pathvars::variable::{
///     DescriptorRegistry, MemoryStore, PathVariableManager, PathVariableResolver, ProjectContext,
/// };
///
/// let mut manager = PathVariableManager::new(
///     MemoryStore::new(),
///     Arc::new(DescriptorRegistry::builtin()),
///     ProjectContext::default(),
/// );
/// manager.set_value("SRC", &VariablePath::from_portable_string("/work/src")).unwrap();
///
/// let resolved = manager
///     .resolve_path(&VariablePath::from_portable_string("PARENT-1-SRC/docs"))
///     .unwrap();
/// assert_eq!(resolved.to_portable_string(), "/work/docs");
/// ```
#[derive(Debug)]
pub struct PathVariableManager<S> {
    store: S,
    registry: Arc<DescriptorRegistry>,
    context: ProjectContext,
}

impl<S: VariableStore> PathVariableManager<S> {
    /// Layer `registry` and `context` over `store`.
    pub fn new(store: S, registry: Arc<DescriptorRegistry>, context: ProjectContext) -> Self {
        Self {
            store,
            registry,
            context,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The descriptor registry.
    pub fn registry(&self) -> &Arc<DescriptorRegistry> {
        &self.registry
    }

    /// The project context descriptors compute from.
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// The binding for `name`.
    pub fn variable(&self, name: &str) -> PathVariable {
        PathVariable::new(name, Arc::clone(&self.registry))
    }

    /// Remove a user-defined variable, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyVariable`] for descriptor-backed names, or a
    /// store failure.
    pub fn remove_value(&mut self, name: &str) -> Result<bool> {
        self.ensure_writable(name)?;
        self.store.remove(name)
    }

    /// Every variable that resolves to an absolute location, in
    /// [`variable_names`](PathVariableResolver::variable_names) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or a value nests too
    /// deeply.
    pub fn resolved_variables(&self) -> Result<Vec<(String, VariablePath)>> {
        let mut resolved = Vec::new();
        for name in self.variable_names()? {
            let Some(value) = self.value(&name)? else {
                continue;
            };
            let location = match self.resolve_path(&value) {
                Ok(location) => location,
                Err(Error::VariableCycle { .. }) => continue,
                Err(e) => return Err(e),
            };
            if location.is_absolute() {
                resolved.push((name, location));
            }
        }
        Ok(resolved)
    }

    fn ensure_writable(&self, name: &str) -> Result<()> {
        if self.variable(name).is_read_only() {
            return Err(Error::ReadOnlyVariable {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn parent_value(&self, name: &str) -> Result<Option<VariablePath>> {
        let (Ok(levels), Some(argument)) = (
            usize::try_from(parent_variable_count(name)),
            parent_variable_argument(name),
        ) else {
            return Ok(None);
        };
        if !self.is_defined(argument)? {
            return Ok(None);
        }

        let mut value = VariablePath::variable(&macro_string(argument));
        for _ in 0..levels {
            value = value.append_segment("..");
        }
        Ok(Some(value))
    }

    fn resolve_at_depth(&self, path: &VariablePath, depth: usize) -> Result<VariablePath> {
        if path.is_absolute() {
            return Ok(path.clone());
        }
        let Some(head) = path.segment(0) else {
            return Ok(path.clone());
        };
        let name = strip_macro(head);
        if depth >= MAX_RESOLVE_DEPTH {
            return Err(Error::VariableCycle {
                name: name.to_string(),
                depth: MAX_RESOLVE_DEPTH,
            });
        }

        let Some(value) = self.value(name)? else {
            return Ok(path.clone());
        };
        let base = self.resolve_at_depth(&value, depth + 1)?;
        if !base.is_absolute() {
            return Ok(path.clone());
        }
        Ok(base.append(&path.remove_first_segments(1)).canonicalize())
    }
}

impl<S: VariableStore> PathVariableResolver for PathVariableManager<S> {
    fn variable_names(&self) -> Result<Vec<String>> {
        let mut names = self.store.names()?;
        for name in self.registry.names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn is_defined(&self, name: &str) -> Result<bool> {
        if self.registry.find_descriptor(name).is_some() || self.store.get(name)?.is_some() {
            return Ok(true);
        }
        if is_parent_variable(name) {
            return Ok(self.parent_value(name)?.is_some());
        }
        Ok(false)
    }

    fn value(&self, name: &str) -> Result<Option<VariablePath>> {
        if let Some(descriptor) = self.registry.find_descriptor(name) {
            return Ok(descriptor.value(None, &self.context));
        }
        if let Some(stored) = self.store.get(name)? {
            return Ok(Some(VariablePath::from_portable_string(&stored)));
        }
        if is_parent_variable(name) {
            return self.parent_value(name);
        }
        Ok(None)
    }

    fn resolve_path(&self, path: &VariablePath) -> Result<VariablePath> {
        self.resolve_at_depth(path, 0)
    }

    fn set_value(&mut self, name: &str, value: &VariablePath) -> Result<()> {
        self.ensure_writable(name)?;
        if !is_valid_variable_name(name) {
            return Err(Error::Validation {
                field: "name".to_string(),
                message: format!("'{name}' is not a valid variable name"),
            });
        }
        let previous = self.store.get(name)?;
        self.store.set(name, &value.to_portable_string())?;

        // Reject a binding that refers back to itself, restoring the old value.
        match self.resolve_path(value) {
            Ok(_) => Ok(()),
            Err(Error::VariableCycle { depth, .. }) => {
                match previous {
                    Some(previous) => self.store.set(name, &previous)?,
                    None => {
                        self.store.remove(name)?;
                    }
                }
                Err(Error::Validation {
                    field: "value".to_string(),
                    message: format!(
                        "'{name}' = '{}' nests deeper than {depth} levels",
                        value.to_portable_string()
                    ),
                })
            }
            Err(e) => Err(e),
        }
    }

    fn define_derived_variable(&mut self, name: &str, value: &VariablePath) -> Result<()> {
        log::debug!("defining derived variable {name} = {}", value.to_portable_string());
        self.set_value(name, value)
    }
}
