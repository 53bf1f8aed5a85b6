//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHVARS_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat, ProjectConfig};
use crate::error::{Error, Result};
use crate::path::CaseSensitivity;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `PATHVARS_WORKSPACE_LOC` | `workspace_location` |
/// | `PATHVARS_PROJECT_NAME` | `project.name` |
/// | `PATHVARS_PROJECT_LOC` | `project.location` |
/// | `PATHVARS_CASE_SENSITIVITY` | `case_sensitivity` |
/// | `PATHVARS_FORCE` | `force` |
/// | `PATHVARS_VARIABLES` | `variables` (comma-separated `NAME=PATH`) |
/// | `PATHVARS_DISABLE_AUTOINIT` | `disable_autoinit` |
/// | `PATHVARS_MAXIMUM_LOCK_WAIT_SECONDS` | `maximum_lock_wait_seconds` |
/// | `PATHVARS_OUTPUT_FORMAT` | `output_format` |
///
/// # Examples
///
/// ```no_run
/// use pathvars::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `PATHVARS_VARIABLES` entries are added to any variables already
    /// present; everything else replaces the existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(location) = env::var("PATHVARS_WORKSPACE_LOC") {
            config.workspace_location = Some(PathBuf::from(location));
        }

        if let Ok(name) = env::var("PATHVARS_PROJECT_NAME") {
            Self::project(config).name = Some(name);
        }

        if let Ok(location) = env::var("PATHVARS_PROJECT_LOC") {
            Self::project(config).location = Some(PathBuf::from(location));
        }

        if let Ok(val) = env::var("PATHVARS_CASE_SENSITIVITY") {
            config.case_sensitivity =
                Some(CaseSensitivity::parse(&val).map_err(|message| Error::Validation {
                    field: "PATHVARS_CASE_SENSITIVITY".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("PATHVARS_FORCE") {
            config.force = Some(Self::parse_bool("PATHVARS_FORCE", &val)?);
        }

        if let Ok(val) = env::var("PATHVARS_VARIABLES") {
            let parsed = Self::parse_variables(&val)?;
            config
                .variables
                .get_or_insert_with(BTreeMap::new)
                .extend(parsed);
        }

        if let Ok(val) = env::var("PATHVARS_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("PATHVARS_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(seconds) = env::var("PATHVARS_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "PATHVARS_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var("PATHVARS_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        Ok(())
    }

    fn project(config: &mut Config) -> &mut ProjectConfig {
        config.project.get_or_insert_with(ProjectConfig::default)
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse `NAME=PATH` pairs separated by commas. Empty entries are ignored.
    fn parse_variables(s: &str) -> Result<BTreeMap<String, String>> {
        let mut variables = BTreeMap::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, path) = entry.split_once('=').ok_or_else(|| Error::Validation {
                field: "PATHVARS_VARIABLES".into(),
                message: format!("Expected NAME=PATH, got '{entry}'"),
            })?;
            variables.insert(name.trim().to_string(), path.trim().to_string());
        }
        Ok(variables)
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(Error::Validation {
                field: "PATHVARS_OUTPUT_FORMAT".into(),
                message: format!("Unknown output format '{s}' (expected json/csv/tsv/table)"),
            }),
        }
    }
}
