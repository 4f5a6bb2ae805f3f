//! Property-based tests for normalization, ordering and selection.

use std::cmp::Ordering;
use uplift_semver::{
    NaturalOrder, Version, VersionComparator, compare, normalize, parse, pad_segments, select_best,
    strip_release_suffix,
};
use uplift_test_utils::prelude::*;

proptest! {
    #[test]
    fn prop_normalize_idempotent(version in version_strategy()) {
        let once = normalize(&version);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_pads_to_three(version in plain_version_strategy()) {
        let normalized = normalize(&version);
        prop_assert!(normalized.split('.').count() >= 3);
    }

    #[test]
    fn prop_release_token_is_transparent(version in release_version_strategy()) {
        let plain = strip_release_suffix(&version);
        prop_assert_eq!(compare(&version, plain), Ordering::Equal);
        prop_assert_eq!(normalize(&version), pad_segments(plain));
    }

    #[test]
    fn prop_shorter_prefix_is_lower(segments in segments_strategy(), extra in 0u64..50) {
        let short = join(&segments);
        let long = format!("{short}.{extra}");
        prop_assert_eq!(compare(&short, &long), Ordering::Less);
        prop_assert_eq!(compare(&long, &short), Ordering::Greater);
    }

    #[test]
    fn prop_ordering_shared_across_syntaxes(a in version_strategy(), b in version_strategy()) {
        let expected = compare(&normalize(&a), &normalize(&b));
        for text in ["^1.0", "~1.2", "1.x", "*", "1 - 3", "[1.0,2.0)", "1.2.3"] {
            let constraint = parse(text, None).unwrap();
            prop_assert_eq!(constraint.compare(&a, &b), expected);
        }
        prop_assert_eq!(NaturalOrder.compare(&a, &b), expected);
    }

    #[test]
    fn prop_compare_antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn prop_compare_transitive(
        a in version_strategy(),
        b in version_strategy(),
        c in version_strategy(),
    ) {
        if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_numeric_not_lexical(a in 0u64..1000, b in 0u64..1000) {
        prop_assert_eq!(compare(&a.to_string(), &b.to_string()), a.cmp(&b));
    }

    #[test]
    fn prop_caret_accepts_own_floor_unless_degenerate(constraint in caret_constraint_strategy()) {
        let parsed = parse(&constraint, None).unwrap();
        let floor = constraint.trim_start_matches('^');
        let version = Version::parse(floor).unwrap();
        let degenerate = version.major() == 0 && version.minor() == 0;
        prop_assert_eq!(parsed.is_valid(floor), !degenerate);
    }

    #[test]
    fn prop_exact_accepts_itself(version in semver_strategy()) {
        let exact = parse(&version, None).unwrap();
        prop_assert!(exact.is_valid(&version));
        let release = format!("{version}.RELEASE");
        prop_assert!(exact.is_valid(&release));
    }

    #[test]
    fn prop_malformed_never_valid(
        constraint in single_constraint_strategy(),
        candidate in malformed_version_strategy(),
    ) {
        let parsed = parse(&constraint, None).unwrap();
        prop_assert!(!parsed.is_valid(&candidate));
    }

    #[test]
    fn prop_selection_is_valid_maximum(
        constraint in single_constraint_strategy(),
        candidates in prop::collection::vec(version_strategy(), 0..20),
    ) {
        let parsed = parse(&constraint, None).unwrap();
        match select_best(&parsed, &candidates) {
            Some(best) => {
                prop_assert!(parsed.is_valid(best));
                for candidate in candidates.iter().filter(|c| parsed.is_valid(c)) {
                    prop_assert_ne!(parsed.compare(candidate, best), Ordering::Greater);
                }
            }
            None => prop_assert!(candidates.iter().all(|c| !parsed.is_valid(c))),
        }
    }

    #[test]
    fn prop_natural_order_picks_first_maximum(
        candidates in prop::collection::vec(plain_version_strategy(), 1..10),
    ) {
        let best = select_best(&NaturalOrder, &candidates).unwrap();
        let first_max = candidates
            .iter()
            .find(|c| {
                candidates
                    .iter()
                    .all(|other| compare(&normalize(c), &normalize(other)) != Ordering::Less)
            })
            .unwrap();
        prop_assert_eq!(best, first_max.as_str());
    }
}

fn join(segments: &[u64]) -> String {
    segments
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
