//! Path normalization functions.
//!
//! Two kinds of normalization live here:
//! - turning user input (`~/src`, `./lib`, `/a/../b`) into an absolute
//!   [`VariablePath`], and
//! - case normalization for comparisons, driven by [`CaseSensitivity`].

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::VariablePath;

/// How path segments compare when matching variables against paths.
///
/// # Examples
///
/// ```
/// use pathvars::path::{CaseSensitivity, VariablePath};
///
/// let path = VariablePath::from_portable_string("/Work/Src");
/// let folded = CaseSensitivity::Insensitive.to_proper_case(&path);
/// assert_eq!(folded.to_portable_string(), "/work/src");
///
/// let kept = CaseSensitivity::Sensitive.to_proper_case(&path);
/// assert_eq!(kept, path);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Follow the host platform: insensitive on Windows, sensitive elsewhere.
    #[default]
    Platform,
    /// Segments compare exactly.
    Sensitive,
    /// Segments are lower-cased before comparing.
    Insensitive,
}

impl CaseSensitivity {
    /// Whether comparisons are exact under this setting.
    #[must_use]
    pub fn is_case_sensitive(self) -> bool {
        match self {
            Self::Platform => !cfg!(windows),
            Self::Sensitive => true,
            Self::Insensitive => false,
        }
    }

    /// Bring a path into comparison form.
    ///
    /// Case-insensitive settings lower-case the portable form; otherwise the
    /// path is returned unchanged.
    #[must_use]
    pub fn to_proper_case(self, path: &VariablePath) -> VariablePath {
        if self.is_case_sensitive() {
            path.clone()
        } else {
            path.to_lowercase()
        }
    }

    /// Parses a case sensitivity setting.
    ///
    /// Recognizes: "platform", "sensitive", "insensitive" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "platform" => Ok(Self::Platform),
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            _ => Err(format!("invalid case sensitivity: {s}")),
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform => write!(f, "platform"),
            Self::Sensitive => write!(f, "sensitive"),
            Self::Insensitive => write!(f, "insensitive"),
        }
    }
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathvars::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `..` segments of an absolute path.
///
/// # Errors
///
/// Returns an error if the path is relative, or if it contains more `..`
/// segments than it has ancestors.
///
/// # Examples
///
/// ```
/// use pathvars::path::normalize::resolve_parent_segments;
/// use pathvars::path::VariablePath;
///
/// let path = VariablePath::from_portable_string("/a/b/../../c");
/// let resolved = resolve_parent_segments(&path).unwrap();
/// assert_eq!(resolved.to_portable_string(), "/c");
/// ```
pub fn resolve_parent_segments(path: &VariablePath) -> Result<VariablePath> {
    if !path.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path must be absolute".to_string(),
        });
    }

    let mut depth = 0usize;
    for segment in path.segments() {
        if segment == ".." {
            depth = depth.checked_sub(1).ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path contains too many '..' components (escapes root)".to_string(),
            })?;
        } else {
            depth += 1;
        }
    }

    Ok(path.canonicalize())
}

/// Normalize user input to an absolute [`VariablePath`].
///
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `..` segments
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot
/// be determined, or the path escapes the root.
///
/// # Examples
///
/// ```no_run
/// use pathvars::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("~/project")).unwrap();
/// assert!(normalized.is_absolute());
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized.to_portable_string(), "/a/c");
/// ```
pub fn normalize(path: &Path) -> Result<VariablePath> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_parent_segments(&VariablePath::from_path(&absolute))
}
