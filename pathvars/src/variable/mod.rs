//! Path variables: names, bindings, descriptors and resolvers.
//!
//! # Key Concepts
//!
//! ## Variable names
//!
//! A name starts with a letter or underscore and contains only letters,
//! digits and underscores. [`valid_variable_name`] turns arbitrary text into
//! such a name and [`unique_variable_name`] adds a numeric suffix until the
//! name is free.
//!
//! ## Descriptors
//!
//! `PROJECT_LOC`, `WORKSPACE_LOC` and `PARENT` are computed by
//! [`VariableDescriptor`]s held in a [`DescriptorRegistry`] rather than
//! stored. A variable with a descriptor is read-only.
//!
//! ## Parent-derived variables
//!
//! `PARENT-<N>-<base>` names the location `N` levels above `base`. The
//! relativizer creates user variables whose stored value is such a
//! reference, e.g. `lib = ${PARENT-2-SRC}`.
//!
//! ## Resolvers
//!
//! [`PathVariableResolver`] is the interface the relativizer works against.
//! [`PathVariableManager`] implements it over any [`VariableStore`].

pub mod binding;
pub mod descriptor;
pub mod manager;
pub mod name;
pub mod parent;
pub mod registry;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use binding::PathVariable;
pub use descriptor::{
    ParentDescriptor, ProjectContext, ProjectLocationDescriptor, VariableDescriptor,
    WorkspaceLocationDescriptor,
};
pub use manager::{
    MemoryStore, PathVariableManager, SeededStore, VariableStore, MAX_RESOLVE_DEPTH,
};
pub use name::{unique_variable_name, valid_variable_name};
pub use parent::{
    build_parent_path_variable, build_variable_macro, is_parent_variable,
    parent_variable_argument, parent_variable_count,
};
pub use registry::DescriptorRegistry;
#[cfg(test)]
pub use resolver::MockPathVariableResolver;
pub use resolver::PathVariableResolver;

/// Location of the current project.
pub const PROJECT_LOC: &str = "PROJECT_LOC";

/// Location of the workspace.
pub const WORKSPACE_LOC: &str = "WORKSPACE_LOC";

/// Ancestor of another variable, used as `PARENT-<N>-<base>`.
pub const PARENT: &str = "PARENT";
