//! Output formats for resolved path variables.
//!
//! Formatters take a list of `(name, resolved path)` pairs, usually from
//! [`PathVariableManager::resolved_variables`](crate::variable::PathVariableManager::resolved_variables),
//! and render them as shell exports, JSON, dotenv or plain text. Paths are
//! rendered with the platform separator.

mod formatters;
mod shell;

use crate::path::VariablePath;
use crate::Result;

pub use formatters::{DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter};
pub use shell::ShellType;

/// Trait for rendering resolved path variables.
pub trait OutputFormatter {
    /// Format `variables`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails, e.g. when a prefixed name is not
    /// a valid environment variable name.
    fn format(&self, variables: &[(String, VariablePath)]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// JSON object.
    Json,
    /// Dotenv (.env file) format.
    Dotenv,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this format. `prefix` is prepended to exported
    /// names and ignored by the JSON and human formats.
    #[must_use]
    pub fn create_formatter(&self, prefix: Option<String>) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell, prefix)),
            Self::Json => Box::new(JsonFormatter),
            Self::Dotenv => Box::new(DotenvFormatter::new(prefix)),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}
