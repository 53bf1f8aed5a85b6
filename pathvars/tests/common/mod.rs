//! Common test utilities for integration tests.

pub mod database;

use std::collections::BTreeMap;
use std::sync::Arc;

use pathvars::{
    DescriptorRegistry, MemoryStore, PathVariableManager, ProjectContext, VariablePath,
};

/// Parses a portable path string.
#[allow(dead_code)]
pub fn path(s: &str) -> VariablePath {
    VariablePath::from_portable_string(s)
}

/// A project context rooted at `/ws`, with the project `demo` at `/ws/demo`.
#[allow(dead_code)]
pub fn demo_context() -> ProjectContext {
    ProjectContext {
        project_name: Some("demo".to_string()),
        project_location: Some(path("/ws/demo")),
        workspace_location: Some(path("/ws")),
    }
}

/// An in-memory manager with the builtin descriptors and the given
/// variables, stored as given.
#[allow(dead_code)]
pub fn manager_with(
    context: ProjectContext,
    variables: &[(&str, &str)],
) -> PathVariableManager<MemoryStore> {
    let store: BTreeMap<String, String> = variables
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect();
    PathVariableManager::new(
        MemoryStore::from(store),
        Arc::new(DescriptorRegistry::builtin()),
        context,
    )
}
