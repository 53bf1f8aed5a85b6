//! The `PARENT-<N>-<base>` grammar and `${NAME}` macros.
//!
//! A parent-derived variable names the location `N` levels above the
//! resolved location of `base`. Such names never pass
//! [`valid_variable_name`](super::valid_variable_name) because they contain
//! dashes, so they cannot collide with user-defined names.

use crate::path::VariablePath;
use crate::variable::PARENT;

/// Prefix shared by every parent-derived variable name.
pub const PARENT_PREFIX: &str = "PARENT-";

fn parts(name: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = name.split('-').collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Whether `name` uses the parent-variable prefix.
#[must_use]
pub fn is_parent_variable(name: &str) -> bool {
    name.starts_with(PARENT_PREFIX)
}

/// Number of levels encoded in a parent-variable name, or `-1` when the name
/// does not split into exactly three dash-separated parts with an integer in
/// the middle.
///
/// # Examples
///
/// ```
/// use pathvars::variable::parent_variable_count;
///
/// assert_eq!(parent_variable_count("PARENT-3-SRC"), 3);
/// assert_eq!(parent_variable_count("PARENT-x-SRC"), -1);
/// assert_eq!(parent_variable_count("PARENT-1-A-B"), -1);
/// ```
#[must_use]
pub fn parent_variable_count(name: &str) -> i64 {
    match parts(name).as_slice() {
        [_, count, _] => count.parse::<i64>().unwrap_or(-1),
        _ => -1,
    }
}

/// The base variable of a parent-variable name, when it has exactly three
/// dash-separated parts.
///
/// # Examples
///
/// ```
/// use pathvars::variable::parent_variable_argument;
///
/// assert_eq!(parent_variable_argument("PARENT-1-PROJECT_LOC"), Some("PROJECT_LOC"));
/// assert_eq!(parent_variable_argument("PARENT-1"), None);
/// ```
#[must_use]
pub fn parent_variable_argument(name: &str) -> Option<&str> {
    match parts(name).as_slice() {
        [_, _, argument] => Some(argument),
        _ => None,
    }
}

/// Build `PARENT-<difference>-<base>`.
///
/// Unless `generate_macro` is set the result is wrapped as `${...}`, which is
/// the form stored as the value of a derived variable.
///
/// # Examples
///
/// ```
/// use pathvars::variable::build_parent_path_variable;
///
/// assert_eq!(build_parent_path_variable("V", 2, true), "PARENT-2-V");
/// assert_eq!(build_parent_path_variable("V", 2, false), "${PARENT-2-V}");
/// ```
#[must_use]
pub fn build_parent_path_variable(base: &str, difference: usize, generate_macro: bool) -> String {
    let name = format!("{PARENT}-{difference}-{base}");
    if generate_macro {
        name
    } else {
        macro_string(&name)
    }
}

/// `${name}`.
#[must_use]
pub fn macro_string(name: &str) -> String {
    format!("${{{name}}}")
}

/// Strip `${` and `}` from a macro string. Plain names pass through.
///
/// # Examples
///
/// ```
/// use pathvars::variable::parent::strip_macro;
///
/// assert_eq!(strip_macro("${PROJECT_LOC}"), "PROJECT_LOC");
/// assert_eq!(strip_macro("PROJECT_LOC"), "PROJECT_LOC");
/// ```
#[must_use]
pub fn strip_macro(segment: &str) -> &str {
    segment
        .strip_prefix("${")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(segment)
}

/// Wrap the first segment of `path` as a macro.
///
/// # Examples
///
/// ```
/// use pathvars::path::VariablePath;
/// use pathvars::variable::build_variable_macro;
///
/// let path = VariablePath::from_portable_string("SRC/main/lib.rs");
/// assert_eq!(build_variable_macro(&path).to_portable_string(), "${SRC}/main/lib.rs");
/// ```
#[must_use]
pub fn build_variable_macro(path: &VariablePath) -> VariablePath {
    match path.segment(0) {
        Some(head) => {
            VariablePath::variable(&macro_string(head)).append(&path.remove_first_segments(1))
        }
        None => path.clone(),
    }
}
