//! Property-based tests for path values.

use super::normalize::resolve_parent_segments;
use super::types::VariablePath;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = VariablePath> {
    prop::collection::vec(segment_strategy(), 0..8)
        .prop_map(|segments| VariablePath::from_parts(None, true, segments))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The portable encoding parses back to the same value.
    #[test]
    fn portable_string_round_trips(path in absolute_path_strategy()) {
        let parsed = VariablePath::from_portable_string(&path.to_portable_string());
        prop_assert_eq!(parsed, path);
    }

    // Every ancestor is a prefix, and shares exactly its own length.
    #[test]
    fn ancestors_are_prefixes(path in absolute_path_strategy(), drop in 0usize..10) {
        let ancestor = path.remove_last_segments(drop);
        prop_assert!(ancestor.is_prefix_of(&path));
        prop_assert_eq!(ancestor.matching_first_segments(&path), ancestor.segment_count());
    }

    // Splitting a path and appending the halves gives the path back.
    #[test]
    fn split_and_append(path in absolute_path_strategy(), at in 0usize..10) {
        let at = at.min(path.segment_count());
        let head = path.remove_last_segments(path.segment_count() - at);
        let tail = path.remove_first_segments(at);
        prop_assert_eq!(head.append(&tail), path);
    }

    // Lower-casing preserves prefix relationships.
    #[test]
    fn lowercase_preserves_prefix(path in absolute_path_strategy(), drop in 0usize..10) {
        let ancestor = path.remove_last_segments(drop);
        prop_assert!(ancestor.to_lowercase().is_prefix_of(&path.to_lowercase()));
    }

    // Resolving `..` is idempotent on paths without parent segments.
    #[test]
    fn resolve_parent_segments_idempotent(path in absolute_path_strategy()) {
        let once = resolve_parent_segments(&path).unwrap();
        let twice = resolve_parent_segments(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, path);
    }
}
