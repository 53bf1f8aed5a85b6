//! Configuration validation.
//!
//! This module checks that configured locations are usable and that extra
//! variables have valid names.

use std::path::Path;

use crate::config::schema::{Config, ProjectConfig};
use crate::error::{Error, Result};
use crate::variable::name::is_valid_variable_name;
use crate::variable::{DescriptorRegistry, PathVariable};
use std::sync::Arc;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use pathvars::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref workspace) = config.workspace_location {
            Self::validate_location("workspace_location", workspace)?;
        }

        if let Some(ref project) = config.project {
            Self::validate_project(project)?;
        }

        if let Some(ref variables) = config.variables {
            let registry = Arc::new(DescriptorRegistry::builtin());
            for (name, value) in variables {
                Self::validate_variable(&registry, name, value)?;
            }
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_project(project: &ProjectConfig) -> Result<()> {
        if let Some(ref name) = project.name {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(Error::Validation {
                    field: "project.name".into(),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
            if trimmed.contains('\0') {
                return Err(Error::Validation {
                    field: "project.name".into(),
                    message: "Cannot contain null bytes".into(),
                });
            }
        }
        if let Some(ref location) = project.location {
            Self::validate_location("project.location", location)?;
        }
        Ok(())
    }

    fn validate_location(field: &str, path: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Location must be absolute: {}", path.display()),
            });
        }
        Ok(())
    }

    /// Validate one `variables` entry.
    ///
    /// The name must already be in valid form and must not shadow a
    /// built-in variable. The value must be non-empty.
    fn validate_variable(registry: &Arc<DescriptorRegistry>, name: &str, value: &str) -> Result<()> {
        let field = format!("variables.{name}");
        if !is_valid_variable_name(name) {
            return Err(Error::Validation {
                field,
                message: "Names must start with a letter or underscore and contain only letters, digits and underscores".into(),
            });
        }
        if PathVariable::new(name, Arc::clone(registry)).is_read_only() {
            return Err(Error::Validation {
                field,
                message: "Built-in variables cannot be redefined".into(),
            });
        }
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field,
                message: "Value cannot be empty".into(),
            });
        }
        Ok(())
    }
}
