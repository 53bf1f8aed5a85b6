//! The set of known variable descriptors.

use std::fmt;

use crate::variable::descriptor::{
    ParentDescriptor, ProjectLocationDescriptor, VariableDescriptor, WorkspaceLocationDescriptor,
};

/// A read-only lookup table of descriptors, keyed by variable name.
///
/// Built once and then shared (typically behind an `Arc`).
///
/// # Examples
///
/// ```
/// use pathvars::variable::DescriptorRegistry;
///
/// let registry = DescriptorRegistry::builtin();
/// assert!(registry.find_descriptor("PROJECT_LOC").is_some());
/// assert!(registry.find_descriptor("SRC").is_none());
/// assert_eq!(
///     registry.names().collect::<Vec<_>>(),
///     ["PROJECT_LOC", "WORKSPACE_LOC", "PARENT"]
/// );
/// ```
pub struct DescriptorRegistry {
    descriptors: Vec<Box<dyn VariableDescriptor>>,
}

impl DescriptorRegistry {
    /// Create a registry from an explicit list.
    ///
    /// If two descriptors share a name, the first one wins.
    #[must_use]
    pub fn new(descriptors: Vec<Box<dyn VariableDescriptor>>) -> Self {
        Self { descriptors }
    }

    /// A registry with no descriptors: every variable is user-defined.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The built-in descriptors: `PROJECT_LOC`, `WORKSPACE_LOC`, `PARENT`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Box::new(ProjectLocationDescriptor),
            Box::new(WorkspaceLocationDescriptor),
            Box::new(ParentDescriptor),
        ])
    }

    /// Find the descriptor for `name`.
    #[must_use]
    pub fn find_descriptor(&self, name: &str) -> Option<&dyn VariableDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name() == name)
            .map(|d| &**d)
    }

    /// Names of all registered descriptors, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name())
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
