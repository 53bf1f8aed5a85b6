//! A single named path variable.

use std::sync::Arc;

use crate::variable::{DescriptorRegistry, ProjectContext};

/// One path variable, viewed through the descriptor registry.
///
/// The variable's value lives in a resolver; this type only answers the
/// questions the registry can: whether the variable is computed (and so
/// read-only) and which extension names it offers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathvars::variable::{DescriptorRegistry, PathVariable, ProjectContext};
///
/// let registry = Arc::new(DescriptorRegistry::builtin());
///
/// let project = PathVariable::new("PROJECT_LOC", Arc::clone(&registry));
/// assert!(project.is_read_only());
///
/// let user = PathVariable::new("SRC", registry);
/// assert!(!user.is_read_only());
/// assert!(user.extensions(None, &ProjectContext::default()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathVariable {
    name: String,
    registry: Arc<DescriptorRegistry>,
}

impl PathVariable {
    /// Bind `name` to `registry`.
    #[must_use]
    pub fn new(name: impl Into<String>, registry: Arc<DescriptorRegistry>) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension names the variable's descriptor offers for `argument`.
    ///
    /// `None` when no descriptor is registered for this name.
    #[must_use]
    pub fn extensions(&self, argument: Option<&str>, context: &ProjectContext) -> Option<Vec<String>> {
        self.registry
            .find_descriptor(&self.name)
            .map(|descriptor| descriptor.extensions(argument, context))
    }

    /// True iff a descriptor is registered for this name.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.registry.find_descriptor(&self.name).is_some()
    }
}
