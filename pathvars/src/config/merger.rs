//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `variables` map.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, ProjectConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathvars::config::{Config, ConfigMerger};
///
/// let low = Config { force: Some(false), ..Default::default() };
/// let high = Config { force: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.force, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Project: field-by-field merge
    /// - Variables: accumulated; on a name clash the source wins
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.workspace_location.is_some() {
            target.workspace_location.clone_from(&source.workspace_location);
        }

        if source.case_sensitivity.is_some() {
            target.case_sensitivity = source.case_sensitivity;
        }

        if source.force.is_some() {
            target.force = source.force;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_project) = source.project {
            target.project = Some(match &target.project {
                Some(target_project) => Self::merge_project(target_project, source_project),
                None => source_project.clone(),
            });
        }

        if let Some(ref source_vars) = source.variables {
            target
                .variables
                .get_or_insert_with(Default::default)
                .extend(source_vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    fn merge_project(target: &ProjectConfig, source: &ProjectConfig) -> ProjectConfig {
        ProjectConfig {
            name: source.name.clone().or_else(|| target.name.clone()),
            location: source.location.clone().or_else(|| target.location.clone()),
        }
    }
}
