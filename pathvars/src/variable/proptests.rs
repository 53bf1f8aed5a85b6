//! Property-based tests for variable names and relativization.

use std::sync::Arc;

use proptest::prelude::*;

use super::{
    unique_variable_name, valid_variable_name, DescriptorRegistry, MemoryStore,
    PathVariableManager, PathVariableResolver, ProjectContext,
};
use crate::path::{CaseSensitivity, VariablePath};
use crate::relativize::Relativizer;

fn segments_strategy(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_]{1,8}", len)
}

fn manager() -> PathVariableManager<MemoryStore> {
    PathVariableManager::new(
        MemoryStore::new(),
        Arc::new(DescriptorRegistry::builtin()),
        ProjectContext::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Sanitized names use only [A-Za-z0-9_] and never start with a digit.
    #[test]
    fn sanitized_names_are_valid(raw in any::<String>()) {
        let name = valid_variable_name(&raw);
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
    }

    // Sanitizing twice changes nothing.
    #[test]
    fn sanitize_is_idempotent(raw in any::<String>()) {
        let once = valid_variable_name(&raw);
        prop_assert_eq!(valid_variable_name(&once), once.clone());
    }

    // A unique name is never one that is already defined.
    #[test]
    fn unique_name_is_free(base in "[A-Z]{1,4}", taken in 0usize..5) {
        let mut m = manager();
        let root = VariablePath::from_portable_string("/");
        m.set_value(&base, &root).unwrap();
        for i in 1..=taken {
            m.set_value(&format!("{base}{i}"), &root).unwrap();
        }
        let name = unique_variable_name(&base, &m).unwrap();
        prop_assert!(!m.is_defined(&name).unwrap());
        prop_assert_eq!(name, format!("{base}{}", taken + 1));
    }

    // Relativizing a path below a variable and resolving it gives the path back.
    #[test]
    fn relativize_round_trips(
        base in segments_strategy(1..5),
        rest in segments_strategy(0..5),
    ) {
        let mut m = manager();
        let value = VariablePath::from_parts(None, true, base.clone());
        m.set_value("V", &value).unwrap();

        let mut all = base;
        all.extend(rest);
        let target = VariablePath::from_parts(None, true, all);

        let relativizer = Relativizer::new(CaseSensitivity::Sensitive);
        let relative = relativizer.to_relative(&mut m, &target, false, None).unwrap();
        prop_assert_eq!(relative.segment(0), Some("V"));
        prop_assert_eq!(m.resolve_path(&relative).unwrap(), target);
    }

    // Forced conversion always resolves back to the original path, and a
    // second conversion defines nothing new.
    #[test]
    fn forced_relativize_round_trips(
        value_segments in segments_strategy(1..6),
        target_segments in segments_strategy(0..6),
    ) {
        let mut m = manager();
        m.set_value("V", &VariablePath::from_parts(None, true, value_segments)).unwrap();
        let target = VariablePath::from_parts(None, true, target_segments);

        let relativizer = Relativizer::new(CaseSensitivity::Sensitive);
        let first = relativizer.to_relative(&mut m, &target, true, Some("V")).unwrap();
        let defined = m.store().variables().len();
        let second = relativizer.to_relative(&mut m, &target, true, Some("V")).unwrap();

        prop_assert_eq!(m.resolve_path(&first).unwrap(), target);
        prop_assert_eq!(first, second);
        prop_assert_eq!(m.store().variables().len(), defined);
    }
}
