//! Dynamically computed path variables.
//!
//! A descriptor provides the value of a variable that is not stored
//! anywhere: the project location, the workspace location, and the
//! `PARENT` family. Variables backed by a descriptor are read-only.

use crate::path::VariablePath;
use crate::variable::parent::build_parent_path_variable;
use crate::variable::{PARENT, PROJECT_LOC, WORKSPACE_LOC};

/// The locations descriptors compute their values from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    /// Name of the current project.
    pub project_name: Option<String>,
    /// Absolute location of the current project.
    pub project_location: Option<VariablePath>,
    /// Absolute location of the workspace.
    pub workspace_location: Option<VariablePath>,
}

impl ProjectContext {
    /// Location a descriptor-backed variable points at, if known.
    #[must_use]
    pub fn location_of(&self, name: &str) -> Option<&VariablePath> {
        match name {
            PROJECT_LOC => self.project_location.as_ref(),
            WORKSPACE_LOC => self.workspace_location.as_ref(),
            _ => None,
        }
    }
}

/// Computes the value and extensions of one read-only variable.
pub trait VariableDescriptor: Send + Sync {
    /// The variable name this descriptor answers for.
    fn name(&self) -> &str;

    /// The variable's value, or `None` if it cannot be computed.
    fn value(&self, argument: Option<&str>, context: &ProjectContext) -> Option<VariablePath>;

    /// Additional variable names this descriptor can produce for
    /// `argument`. Empty when it produces none.
    fn extensions(&self, argument: Option<&str>, context: &ProjectContext) -> Vec<String>;
}

/// `PROJECT_LOC`: the location of the current project.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectLocationDescriptor;

impl VariableDescriptor for ProjectLocationDescriptor {
    fn name(&self) -> &str {
        PROJECT_LOC
    }

    fn value(&self, _argument: Option<&str>, context: &ProjectContext) -> Option<VariablePath> {
        context.project_location.clone()
    }

    fn extensions(&self, _argument: Option<&str>, context: &ProjectContext) -> Vec<String> {
        context.project_name.iter().cloned().collect()
    }
}

/// `WORKSPACE_LOC`: the location of the workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceLocationDescriptor;

impl VariableDescriptor for WorkspaceLocationDescriptor {
    fn name(&self) -> &str {
        WORKSPACE_LOC
    }

    fn value(&self, _argument: Option<&str>, context: &ProjectContext) -> Option<VariablePath> {
        context.workspace_location.clone()
    }

    fn extensions(&self, _argument: Option<&str>, _context: &ProjectContext) -> Vec<String> {
        Vec::new()
    }
}

/// `PARENT`: ancestors of other variables.
///
/// `PARENT` itself has no value. Its extensions for argument `ARG` are
/// `PARENT-1-ARG` up to the depth of `ARG`'s location.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentDescriptor;

impl VariableDescriptor for ParentDescriptor {
    fn name(&self) -> &str {
        PARENT
    }

    fn value(&self, _argument: Option<&str>, _context: &ProjectContext) -> Option<VariablePath> {
        None
    }

    fn extensions(&self, argument: Option<&str>, context: &ProjectContext) -> Vec<String> {
        let Some(argument) = argument else {
            return Vec::new();
        };
        let Some(location) = context.location_of(argument) else {
            return Vec::new();
        };
        (1..=location.segment_count())
            .map(|levels| build_parent_path_variable(argument, levels, true))
            .collect()
    }
}
