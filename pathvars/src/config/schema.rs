//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathvars: the
//! locations behind the built-in variables, matching behavior, and extra
//! user variables.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::path::{CaseSensitivity, VariablePath};
use crate::variable::ProjectContext;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; see
/// [`ConfigMerger`](super::ConfigMerger).
///
/// # Examples
///
/// ```
/// use pathvars::config::{Config, ProjectConfig};
/// use std::path::PathBuf;
///
/// let config = Config {
///     workspace_location: Some(PathBuf::from("/home/dev/ws")),
///     project: Some(ProjectConfig {
///         name: Some("app".to_string()),
///         location: Some(PathBuf::from("/home/dev/ws/app")),
///     }),
///     ..Default::default()
/// };
///
/// let context = config.project_context();
/// assert_eq!(context.project_name.as_deref(), Some("app"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Value of `WORKSPACE_LOC`.
    pub workspace_location: Option<PathBuf>,

    /// The current project; its location is `PROJECT_LOC`.
    pub project: Option<ProjectConfig>,

    /// How paths are compared when matching variables.
    pub case_sensitivity: Option<CaseSensitivity>,

    /// Default for forced relativization.
    pub force: Option<bool>,

    /// Extra user variables, name to path.
    pub variables: Option<BTreeMap<String, String>>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Maximum time to wait for the database lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The descriptor context described by this configuration.
    #[must_use]
    pub fn project_context(&self) -> ProjectContext {
        let project = self.project.as_ref();
        ProjectContext {
            project_name: project.and_then(|p| p.name.clone()),
            project_location: project
                .and_then(|p| p.location.as_deref())
                .map(VariablePath::from_path),
            workspace_location: self
                .workspace_location
                .as_deref()
                .map(VariablePath::from_path),
        }
    }

    /// The configured case sensitivity, or the platform default.
    #[must_use]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity.unwrap_or_default()
    }
}

/// Project settings.
///
/// # Examples
///
/// ```
/// use pathvars::config::ProjectConfig;
///
/// let project: ProjectConfig = serde_yaml::from_str("name: app\nlocation: /srv/app\n").unwrap();
/// assert_eq!(project.name.as_deref(), Some("app"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name.
    pub name: Option<String>,

    /// Absolute project location.
    pub location: Option<PathBuf>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use pathvars::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}
