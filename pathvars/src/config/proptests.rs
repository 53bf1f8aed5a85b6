//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn variables_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-Z_][A-Z0-9_]{0,8}", "/[a-z]{1,8}(/[a-z]{1,8}){0,3}", 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher-precedence scalar values always win; absent values never erase.
    #[test]
    fn config_merge_higher_precedence_wins(
        low_force in prop::option::of(any::<bool>()),
        high_force in prop::option::of(any::<bool>()),
        low_timeout in prop::option::of(1u64..600),
        high_timeout in prop::option::of(1u64..600),
    ) {
        let mut merged = Config {
            force: low_force,
            maximum_lock_wait_seconds: low_timeout,
            ..Default::default()
        };
        let high = Config {
            force: high_force,
            maximum_lock_wait_seconds: high_timeout,
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.force, high_force.or(low_force));
        prop_assert_eq!(merged.maximum_lock_wait_seconds, high_timeout.or(low_timeout));
    }

    // Variables accumulate: every name from either side survives, and the
    // higher-precedence value wins on clashes.
    #[test]
    fn config_merge_variables_accumulate(
        low in variables_strategy(),
        high in variables_strategy(),
    ) {
        let mut merged = Config { variables: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut merged, &Config { variables: Some(high.clone()), ..Default::default() });
        let merged = merged.variables.unwrap_or_default();

        for (name, value) in &high {
            prop_assert_eq!(merged.get(name), Some(value));
        }
        for (name, value) in &low {
            if !high.contains_key(name) {
                prop_assert_eq!(merged.get(name), Some(value));
            }
        }
        prop_assert!(merged.len() <= low.len() + high.len());
    }
}
