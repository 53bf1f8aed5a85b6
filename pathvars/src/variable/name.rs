//! Variable name sanitation and uniqueness.

use crate::error::Result;
use crate::variable::PathVariableResolver;

/// Character prepended when a candidate does not start with a letter or `_`.
pub const NAME_PREFIX: char = 'A';

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turn an arbitrary string into a valid variable name.
///
/// The suffix beginning at the first `-` is removed, whitespace is trimmed,
/// [`NAME_PREFIX`] is prepended if the first character is not a letter or
/// underscore, and finally every character outside `[A-Za-z0-9_]` is
/// dropped. Empty input yields an empty name.
///
/// # Examples
///
/// ```
/// use pathvars::variable::valid_variable_name;
///
/// assert_eq!(valid_variable_name("VAR-ARG"), "VAR");
/// assert_eq!(valid_variable_name(" 1abc "), "A1abc");
/// assert_eq!(valid_variable_name("my dir.v2"), "mydirv2");
/// assert_eq!(valid_variable_name(""), "");
/// ```
#[must_use]
pub fn valid_variable_name(raw: &str) -> String {
    let head = raw.split('-').next().unwrap_or_default().trim();

    let mut name = String::with_capacity(head.len() + 1);
    match head.chars().next() {
        None => return name,
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        Some(_) => name.push(NAME_PREFIX),
    }

    name.extend(head.chars().filter(|&c| is_name_char(c)));
    name
}

/// Whether `name` is already in valid form.
///
/// # Examples
///
/// ```
/// use pathvars::variable::name::is_valid_variable_name;
///
/// assert!(is_valid_variable_name("SRC_ROOT"));
/// assert!(!is_valid_variable_name("2nd"));
/// assert!(!is_valid_variable_name(""));
/// ```
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    !name.is_empty() && valid_variable_name(name) == name
}

/// Sanitize `base` and append the smallest numeric suffix that makes it
/// unused in `resolver`.
///
/// # Errors
///
/// Propagates resolver failures.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathvars::path::VariablePath;
/// use pathvars::variable::{
///     unique_variable_name, DescriptorRegistry, MemoryStore, PathVariableManager,
///     PathVariableResolver, ProjectContext,
/// };
///
/// let mut manager = PathVariableManager::new(
///     MemoryStore::new(),
///     Arc::new(DescriptorRegistry::builtin()),
///     ProjectContext::default(),
/// );
/// assert_eq!(unique_variable_name("FOO", &manager).unwrap(), "FOO");
///
/// manager.set_value("FOO", &VariablePath::from_portable_string("/foo")).unwrap();
/// assert_eq!(unique_variable_name("FOO", &manager).unwrap(), "FOO1");
/// ```
pub fn unique_variable_name<R>(base: &str, resolver: &R) -> Result<String>
where
    R: PathVariableResolver + ?Sized,
{
    let base = valid_variable_name(base);
    if !resolver.is_defined(&base)? {
        return Ok(base);
    }

    let mut suffix: u64 = 1;
    loop {
        let candidate = format!("{base}{suffix}");
        if !resolver.is_defined(&candidate)? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
