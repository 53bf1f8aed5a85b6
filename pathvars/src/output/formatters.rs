//! Output formatter implementations.

use std::collections::BTreeMap;

use crate::path::VariablePath;
use crate::{Error, Result};

use super::{OutputFormatter, ShellType};

/// Valid names start with a letter or underscore and contain only letters,
/// digits and underscores.
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// The environment variable name for `name` under an optional prefix.
fn env_var_name(prefix: Option<&str>, name: &str) -> Result<String> {
    let var_name = format!("{}{name}", prefix.unwrap_or_default());
    if is_valid_env_var_name(&var_name) {
        Ok(var_name)
    } else {
        Err(Error::Validation {
            field: "environment_variable".to_string(),
            message: format!(
                "invalid environment variable name '{var_name}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
            ),
        })
    }
}

fn dotenv_value(value: &str) -> String {
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\' | '$'))
    {
        format!("\"{}\"", value.replace('\\', r"\\").replace('"', "\\\"").replace('$', r"\$"))
    } else {
        value.to_string()
    }
}

/// Formatter for shell-specific export statements.
#[derive(Debug, Clone)]
pub struct ExportFormatter {
    shell: ShellType,
    prefix: Option<String>,
}

impl ExportFormatter {
    /// An export formatter for `shell`. Each variable is exported under its
    /// own name, preceded by `prefix` when given.
    #[must_use]
    pub fn new(shell: ShellType, prefix: Option<String>) -> Self {
        Self { shell, prefix }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, variables: &[(String, VariablePath)]) -> Result<String> {
        let exports = variables
            .iter()
            .map(|(name, path)| {
                let var_name = env_var_name(self.prefix.as_deref(), name)?;
                Ok(self.shell.format_export(&var_name, &path.to_os_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(exports.join("\n"))
    }
}

/// Formatter for JSON output: one object mapping names to paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, variables: &[(String, VariablePath)]) -> Result<String> {
        let json_map: BTreeMap<&str, String> = variables
            .iter()
            .map(|(name, path)| (name.as_str(), path.to_os_string()))
            .collect();

        serde_json::to_string_pretty(&json_map).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for dotenv (.env file) format.
#[derive(Debug, Clone, Default)]
pub struct DotenvFormatter {
    prefix: Option<String>,
}

impl DotenvFormatter {
    /// A dotenv formatter, prefixing names with `prefix` when given.
    #[must_use]
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }
}

impl OutputFormatter for DotenvFormatter {
    fn format(&self, variables: &[(String, VariablePath)]) -> Result<String> {
        let lines = variables
            .iter()
            .map(|(name, path)| {
                let var_name = env_var_name(self.prefix.as_deref(), name)?;
                Ok(format!("{var_name}={}", dotenv_value(&path.to_os_string())))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, variables: &[(String, VariablePath)]) -> Result<String> {
        if variables.is_empty() {
            return Ok("No path variables defined.".to_string());
        }

        let width = variables
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or_default();
        let mut lines = vec!["Path variables:".to_string()];
        lines.extend(
            variables
                .iter()
                .map(|(name, path)| format!("  {name:<width$}  {path}")),
        );
        Ok(lines.join("\n"))
    }
}
