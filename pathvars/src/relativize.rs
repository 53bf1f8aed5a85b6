//! Rewriting absolute paths in terms of path variables.
//!
//! Given `/home/dev/ws/app/src/main.rs` and a variable `APP` bound to
//! `/home/dev/ws/app`, [`Relativizer::to_relative`] produces `APP/src/main.rs`
//! and [`Relativizer::to_relative_macro`] produces `${APP}/src/main.rs`.
//!
//! # Search order
//!
//! 1. A hint variable, if given and defined, is used unconditionally.
//! 2. Otherwise the variable whose value is the longest prefix of the path
//!    wins. `WORKSPACE_LOC` is skipped on the first pass and `PARENT` is
//!    always skipped.
//! 3. In force mode, when nothing is a prefix, the path is truncated one
//!    segment at a time until some variable's value lives below it. The
//!    result is expressed through a `PARENT-<N>-<base>` variable; outside
//!    macro mode a user variable holding `${PARENT-<N>-<base>}` is reused or
//!    defined.
//! 4. If nothing matched, the search is repeated once including
//!    `WORKSPACE_LOC`.
//!
//! A path no variable can express comes back unchanged, as does a relative
//! path. A variable whose value cannot be resolved (for example a cyclic
//! definition) is skipped.

use crate::error::{Error, Result};
use crate::path::{CaseSensitivity, VariablePath};
use crate::variable::{
    build_parent_path_variable, build_variable_macro, unique_variable_name, valid_variable_name,
    PathVariableResolver, PARENT, PROJECT_LOC, WORKSPACE_LOC,
};

/// Base name for a derived variable when the path offers none.
pub const ROOT_NAME: &str = "ROOT";

/// Converts absolute paths to variable-relative form.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathvars::path::VariablePath;
/// use pathvars::relativize::Relativizer;
/// use pathvars::variable::{
///     DescriptorRegistry, MemoryStore, PathVariableManager, PathVariableResolver, ProjectContext,
/// };
///
/// let mut manager = PathVariableManager::new(
///     MemoryStore::new(),
///     Arc::new(DescriptorRegistry::builtin()),
///     ProjectContext::default(),
/// );
/// manager.set_value("A", &VariablePath::from_portable_string("/x")).unwrap();
/// manager.set_value("B", &VariablePath::from_portable_string("/x/y")).unwrap();
///
/// let relativizer = Relativizer::default();
/// let path = VariablePath::from_portable_string("/x/y/z");
///
/// let relative = relativizer.to_relative(&mut manager, &path, false, None).unwrap();
/// assert_eq!(relative.to_portable_string(), "B/z");
///
/// let as_macro = relativizer.to_relative_macro(&mut manager, &path, false, None).unwrap();
/// assert_eq!(as_macro.to_portable_string(), "${B}/z");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relativizer {
    case: CaseSensitivity,
}

#[derive(Debug, Clone, Copy)]
struct Options<'a> {
    force: bool,
    hint: Option<&'a str>,
    skip_workspace: bool,
    generate_macro: bool,
}

impl Relativizer {
    /// A relativizer comparing paths under `case`.
    #[must_use]
    pub fn new(case: CaseSensitivity) -> Self {
        Self { case }
    }

    /// The case sensitivity in use.
    #[must_use]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    /// Express `path` relative to a variable, as `NAME/rest`. A relative
    /// `path` comes back unchanged.
    ///
    /// # Errors
    ///
    /// Propagates resolver failures, including failure to define a derived
    /// variable in force mode.
    pub fn to_relative<R>(
        &self,
        resolver: &mut R,
        path: &VariablePath,
        force: bool,
        hint: Option<&str>,
    ) -> Result<VariablePath>
    where
        R: PathVariableResolver + ?Sized,
    {
        self.convert(
            resolver,
            path,
            Options {
                force,
                hint,
                skip_workspace: true,
                generate_macro: false,
            },
        )
    }

    /// Express `path` relative to a variable, as `${NAME}/rest`.
    ///
    /// In force mode the macro names the parent variable directly
    /// (`${PARENT-2-SRC}/rest`) and nothing is defined.
    ///
    /// # Errors
    ///
    /// Propagates resolver failures.
    pub fn to_relative_macro<R>(
        &self,
        resolver: &mut R,
        path: &VariablePath,
        force: bool,
        hint: Option<&str>,
    ) -> Result<VariablePath>
    where
        R: PathVariableResolver + ?Sized,
    {
        self.convert(
            resolver,
            path,
            Options {
                force,
                hint,
                skip_workspace: true,
                generate_macro: true,
            },
        )
    }

    fn convert<R>(&self, resolver: &mut R, path: &VariablePath, opts: Options<'_>) -> Result<VariablePath>
    where
        R: PathVariableResolver + ?Sized,
    {
        let finish = |relative: VariablePath| {
            if opts.generate_macro {
                build_variable_macro(&relative)
            } else {
                relative
            }
        };

        if !path.is_absolute() {
            return Ok(path.clone());
        }

        if let Some(hint) = opts.hint {
            if resolver.is_defined(hint)? {
                log::debug!("relativizing {path} against hint {hint}");
                let relative =
                    self.relative_to_variable(resolver, path, hint, opts.force, opts.generate_macro)?;
                return Ok(relative.map_or_else(|| path.clone(), finish));
            }
        }

        let target = self.case.to_proper_case(path);
        let names = resolver.variable_names()?;

        if let Some(name) = self.longest_prefix(resolver, &names, &target, opts.skip_workspace)? {
            log::debug!("{name} is the longest prefix of {path}");
            if let Some(relative) =
                self.relative_to_variable(resolver, path, &name, false, opts.generate_macro)?
            {
                return Ok(finish(relative));
            }
        }

        if opts.force {
            if let Some(name) = self.closest_descendant(resolver, &names, &target, opts.skip_workspace)? {
                log::debug!("forcing {path} relative to {name}");
                if let Some(relative) =
                    self.relative_to_variable(resolver, path, &name, true, opts.generate_macro)?
                {
                    return Ok(finish(relative));
                }
            }
        }

        if opts.skip_workspace {
            return self.convert(
                resolver,
                path,
                Options {
                    skip_workspace: false,
                    ..opts
                },
            );
        }

        log::debug!("no variable matches {path}");
        Ok(path.clone())
    }

    /// The variable whose value is the longest prefix of `target`. The first
    /// enumerated wins ties.
    fn longest_prefix<R>(
        &self,
        resolver: &R,
        names: &[String],
        target: &VariablePath,
        skip_workspace: bool,
    ) -> Result<Option<String>>
    where
        R: PathVariableResolver + ?Sized,
    {
        let mut best: Option<(&str, usize)> = None;
        for name in candidates(names, skip_workspace) {
            let Some(value) = self.resolved_value(resolver, name)? else {
                continue;
            };
            if !value.is_prefix_of(target) {
                continue;
            }
            let segments = value.segment_count();
            if best.map_or(true, |(_, longest)| segments > longest) {
                best = Some((name, segments));
            }
        }
        Ok(best.map(|(name, _)| name.to_string()))
    }

    /// For force mode: truncate `target` from the end until some variable's
    /// value lies below the truncated path. Among those, the value with the
    /// fewest segments wins; the first enumerated wins ties.
    fn closest_descendant<R>(
        &self,
        resolver: &R,
        names: &[String],
        target: &VariablePath,
        skip_workspace: bool,
    ) -> Result<Option<String>>
    where
        R: PathVariableResolver + ?Sized,
    {
        let original_segments = target.segment_count();

        for levels in 0..=original_segments {
            let ancestor = target.remove_last_segments(levels);
            let mut best: Option<(&str, usize)> = None;
            for name in candidates(names, skip_workspace) {
                let Some(value) = self.resolved_value(resolver, name)? else {
                    continue;
                };
                if !ancestor.is_prefix_of(&value) {
                    continue;
                }
                let depth = value.segment_count();
                if best.map_or(true, |(_, shallowest)| depth < shallowest) {
                    best = Some((name, depth));
                }
            }
            if let Some((name, _)) = best {
                return Ok(Some(name.to_string()));
            }
        }

        if original_segments == 0 {
            if let Some(value) = self.resolved_value(resolver, PROJECT_LOC)? {
                if target.is_prefix_of(&value) {
                    return Ok(Some(PROJECT_LOC.to_string()));
                }
            }
        }

        Ok(None)
    }

    /// Express `path` relative to `variable`. `None` if the variable has no
    /// absolute value, or its value is not a prefix and `force` is off.
    fn relative_to_variable<R>(
        &self,
        resolver: &mut R,
        path: &VariablePath,
        variable: &str,
        force: bool,
        generate_macro: bool,
    ) -> Result<Option<VariablePath>>
    where
        R: PathVariableResolver + ?Sized,
    {
        let Some(value) = self.resolved_value(resolver, variable)? else {
            return Ok(None);
        };
        let target = self.case.to_proper_case(path);
        let value_segments = value.segment_count();

        if value.is_prefix_of(&target) {
            let rest = path.remove_first_segments(value_segments);
            return Ok(Some(VariablePath::variable(variable).append(&rest)));
        }
        if !force {
            return Ok(None);
        }

        let matching = target.matching_first_segments(&value);
        let parent = build_parent_path_variable(variable, value_segments - matching, generate_macro);

        let head = if generate_macro {
            parent
        } else if let Some(existing) = existing_variable(resolver, &parent)? {
            existing
        } else {
            let base = match matching.checked_sub(1).and_then(|i| path.segment(i)) {
                Some(segment) => segment,
                None => path.device().unwrap_or(ROOT_NAME),
            };
            let base = match valid_variable_name(base) {
                sanitized if sanitized.is_empty() => ROOT_NAME.to_string(),
                sanitized => sanitized,
            };
            let name = unique_variable_name(&base, resolver)?;
            resolver.define_derived_variable(&name, &VariablePath::variable(&parent))?;
            log::debug!("defined {name} = {parent}");
            name
        };

        let rest = path.remove_first_segments(matching);
        Ok(Some(VariablePath::variable(&head).append(&rest)))
    }

    /// Resolve `name`'s value in comparison form. `None` unless it resolves to
    /// an absolute location.
    fn resolved_value<R>(&self, resolver: &R, name: &str) -> Result<Option<VariablePath>>
    where
        R: PathVariableResolver + ?Sized,
    {
        let Some(value) = resolver.value(name)? else {
            return Ok(None);
        };
        let resolved = match resolver.resolve_path(&value) {
            Ok(resolved) => resolved,
            Err(Error::VariableCycle { .. }) => {
                log::debug!("skipping {name}: value nests too deeply");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        if !resolved.is_absolute() {
            return Ok(None);
        }
        Ok(Some(self.case.to_proper_case(&resolved.canonicalize())))
    }
}

fn candidates(names: &[String], skip_workspace: bool) -> impl Iterator<Item = &str> {
    names
        .iter()
        .map(String::as_str)
        .filter(move |name| *name != PARENT && !(skip_workspace && *name == WORKSPACE_LOC))
}

/// The variable whose stored value is exactly `reference`, e.g. `${PARENT-2-SRC}`.
fn existing_variable<R>(resolver: &R, reference: &str) -> Result<Option<String>>
where
    R: PathVariableResolver + ?Sized,
{
    for name in resolver.variable_names()? {
        if let Some(value) = resolver.value(&name)? {
            if value.to_os_string() == reference {
                return Ok(Some(name));
            }
        }
    }
    Ok(None)
}
