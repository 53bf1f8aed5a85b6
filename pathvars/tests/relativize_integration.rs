//! Integration tests for relativizing paths against path variables.
//!
//! These tests drive the public API end to end: a manager over an in-memory
//! store with the builtin descriptors, a [`Relativizer`], and resolution of
//! the result back to an absolute path.

mod common;

use common::{demo_context, manager_with, path};
use pathvars::variable::{unique_variable_name, valid_variable_name};
use pathvars::{CaseSensitivity, PathVariableResolver, ProjectContext, Relativizer};

fn sensitive() -> Relativizer {
    Relativizer::new(CaseSensitivity::Sensitive)
}

// ============================================================================
// Name sanitation and uniqueness
// ============================================================================

#[test]
fn test_sanitize_examples() {
    assert_eq!(valid_variable_name("VAR-ARG"), "VAR");
    assert_eq!(valid_variable_name(" 1abc "), "A1abc");
    assert_eq!(valid_variable_name("my.project"), "myproject");
    assert_eq!(valid_variable_name("_ok"), "_ok");
}

#[test]
fn test_unique_name_sequence() {
    let m = manager_with(ProjectContext::default(), &[]);
    assert_eq!(unique_variable_name("FOO", &m).unwrap(), "FOO");

    let m = manager_with(ProjectContext::default(), &[("FOO", "/f"), ("FOO1", "/f1")]);
    assert_eq!(unique_variable_name("FOO", &m).unwrap(), "FOO2");
}

// ============================================================================
// Prefix matching
// ============================================================================

#[test]
fn test_round_trip_preserves_suffix_case() {
    let mut m = manager_with(ProjectContext::default(), &[("SRC", "/srv/Src")]);
    let target = path("/srv/Src/Lib/Util.C");

    let relative = sensitive().to_relative(&mut m, &target, false, None).unwrap();
    assert_eq!(relative.to_portable_string(), "SRC/Lib/Util.C");
    assert_eq!(m.resolve_path(&relative).unwrap(), target);
}

#[test]
fn test_most_specific_variable_wins() {
    let mut m = manager_with(ProjectContext::default(), &[("A", "/x"), ("B", "/x/y")]);

    let relative = sensitive()
        .to_relative(&mut m, &path("/x/y/z"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "B/z");

    let as_macro = sensitive()
        .to_relative_macro(&mut m, &path("/x/y/z"), false, None)
        .unwrap();
    assert_eq!(as_macro.to_portable_string(), "${B}/z");
}

#[test]
fn test_case_insensitive_matching() {
    let mut m = manager_with(ProjectContext::default(), &[("SRC", "/Srv/SRC")]);
    let relativizer = Relativizer::new(CaseSensitivity::Insensitive);

    let relative = relativizer
        .to_relative(&mut m, &path("/srv/src/Main.rs"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "SRC/Main.rs");

    let unmatched = sensitive()
        .to_relative(&mut m, &path("/srv/src/Main.rs"), false, None)
        .unwrap();
    assert_eq!(unmatched, path("/srv/src/Main.rs"));
}

#[test]
fn test_no_match_returns_original() {
    let mut m = manager_with(ProjectContext::default(), &[("SRC", "/srv/src")]);
    let target = path("/elsewhere/file");

    let result = sensitive().to_relative(&mut m, &target, false, None).unwrap();
    assert_eq!(result, target);
    assert_eq!(m.store().variables().len(), 1);
}

// ============================================================================
// Builtin descriptors
// ============================================================================

#[test]
fn test_project_location_preferred_over_workspace() {
    let mut m = manager_with(demo_context(), &[]);

    let relative = sensitive()
        .to_relative(&mut m, &path("/ws/demo/src/main.rs"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "PROJECT_LOC/src/main.rs");
}

#[test]
fn test_workspace_only_on_retry() {
    let mut m = manager_with(demo_context(), &[]);

    let relative = sensitive()
        .to_relative(&mut m, &path("/ws/other/file.txt"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "WORKSPACE_LOC/other/file.txt");
    assert_eq!(
        m.resolve_path(&relative).unwrap(),
        path("/ws/other/file.txt")
    );
}

#[test]
fn test_user_variable_beats_workspace_on_first_pass() {
    let mut m = manager_with(demo_context(), &[("TOP", "/")]);

    let relative = sensitive()
        .to_relative(&mut m, &path("/ws/other/file.txt"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "TOP/ws/other/file.txt");
}

// ============================================================================
// Forced derivation
// ============================================================================

#[test]
fn test_forced_macro_uses_parent_variable() {
    let mut m = manager_with(ProjectContext::default(), &[("V", "/a/b/c/d/e")]);

    let result = sensitive()
        .to_relative_macro(&mut m, &path("/a/b/c"), true, None)
        .unwrap();
    assert_eq!(result.to_portable_string(), "${PARENT-2-V}");
    assert_eq!(m.resolve_path(&result).unwrap(), path("/a/b/c"));
}

#[test]
fn test_forced_derivation_is_idempotent() {
    let mut m = manager_with(ProjectContext::default(), &[("V", "/a/b/c/d/e")]);
    let relativizer = sensitive();

    let first = relativizer
        .to_relative(&mut m, &path("/a/b/c/x"), true, None)
        .unwrap();
    let defined = m.store().variables().clone();
    let second = relativizer
        .to_relative(&mut m, &path("/a/b/c/x"), true, None)
        .unwrap();

    assert_eq!(first.to_portable_string(), "c/x");
    assert_eq!(first, second);
    assert_eq!(m.store().variables(), &defined);
    assert_eq!(defined.get("c").map(String::as_str), Some("${PARENT-2-V}"));
}

#[test]
fn test_forced_against_project_location() {
    let mut m = manager_with(demo_context(), &[]);

    let result = sensitive()
        .to_relative_macro(&mut m, &path("/ws/lib/x"), true, None)
        .unwrap();
    assert_eq!(result.to_portable_string(), "${PARENT-1-PROJECT_LOC}/lib/x");
    assert_eq!(m.resolve_path(&result).unwrap(), path("/ws/lib/x"));
}

#[test]
fn test_hint_limits_search() {
    let mut m = manager_with(
        ProjectContext::default(),
        &[("NEAR", "/a/b/c"), ("FAR", "/a")],
    );

    let relative = sensitive()
        .to_relative(&mut m, &path("/a/b/c/d"), false, Some("FAR"))
        .unwrap();
    assert_eq!(relative.to_portable_string(), "FAR/b/c/d");

    let unmatched = sensitive()
        .to_relative(&mut m, &path("/z"), false, Some("NEAR"))
        .unwrap();
    assert_eq!(unmatched, path("/z"));
}

#[test]
fn test_resolve_nested_derived_references() {
    let mut m = manager_with(
        ProjectContext::default(),
        &[("SRC", "/srv/src"), ("LIB", "${PARENT-1-SRC}/lib")],
    );

    assert_eq!(
        m.resolve_path(&path("LIB/x.c")).unwrap(),
        path("/srv/lib/x.c")
    );

    let relative = sensitive()
        .to_relative(&mut m, &path("/srv/lib/x.c"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "LIB/x.c");
}
