//! Shell detection and export formatting.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Checked in order: `ZSH_VERSION`, `FISH_VERSION`, `PSModulePath`, then
    /// the `SHELL` path. Anything else is bash.
    #[must_use]
    pub fn detect() -> Self {
        if env::var_os("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if env::var_os("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if env::var_os("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(shell) if shell.contains("zsh") => Self::Zsh,
            Ok(shell) if shell.contains("fish") => Self::Fish,
            Ok(shell) if shell.contains("pwsh") || shell.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Parse a shell name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Quote `value` so this shell reads it back verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.quote("/srv/my src"), "'/srv/my src'");
    /// assert_eq!(ShellType::Bash.quote("it's"), r"'it'\''s'");
    /// assert_eq!(ShellType::PowerShell.quote("C:\\$dir"), "\"C:\\`$dir\"");
    /// ```
    #[must_use]
    pub fn quote(&self, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("'{}'", value.replace('\'', r"'\''")),
            Self::Fish => format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'")),
            Self::PowerShell => {
                let mut quoted = String::with_capacity(value.len() + 2);
                quoted.push('"');
                for c in value.chars() {
                    if matches!(c, '`' | '"' | '$') {
                        quoted.push('`');
                    }
                    quoted.push(c);
                }
                quoted.push('"');
                quoted
            }
        }
    }

    /// Format an export statement for this shell type, quoting the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("SRC", "/srv/src"), "export SRC='/srv/src'");
    /// assert_eq!(ShellType::Fish.format_export("SRC", "/srv/src"), "set -x SRC '/srv/src'");
    /// assert_eq!(ShellType::PowerShell.format_export("SRC", "/srv/src"), "$env:SRC=\"/srv/src\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        let value = self.quote(value);
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={value}"),
            Self::Fish => format!("set -x {var} {value}"),
            Self::PowerShell => format!("$env:{var}={value}"),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::PowerShell => "powershell",
        };
        f.write_str(name)
    }
}

impl FromStr for ShellType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
