//! Variable-precision version ordering.
//!
//! Segments are compared numerically, left to right. When one version runs
//! out of segments first and everything so far was equal, the shorter one
//! is lower: `1.1 < 1.1.0 < 1.1.1`, `1 < 1.1`.

use crate::metadata::{MetadataPattern, accepts_metadata};
use crate::version::{Version, normalize};
use std::cmp::Ordering;

/// Compare two segment slices.
#[must_use]
pub fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    for (left, right) in a.iter().zip(b) {
        match left.cmp(right) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Compare two version strings by their numeric segments.
///
/// No normalization is applied beyond dropping a release token; callers
/// that want `1.1` and `1.1.0` to tie should [`normalize`](crate::normalize)
/// first. Inputs that fail strict parsing are ordered by their leading
/// numeric segments.
///
/// ```
/// use std::cmp::Ordering;
/// use uplift_semver::compare;
///
/// assert_eq!(compare("1.1.1", "1.1.2"), Ordering::Less);
/// assert_eq!(compare("9", "10"), Ordering::Less);
/// assert_eq!(compare("1.1", "1.1.1"), Ordering::Less);
/// assert_eq!(compare("1.2.3.RELEASE", "1.2.3"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_segments(
        Version::lenient(a).segments(),
        Version::lenient(b).segments(),
    )
}

/// Compare two version strings after padding both to canonical precision.
///
/// This is the ordering every comparator in the crate uses: `1.2`, `1.2.0`
/// and `1.2.0.RELEASE` tie.
#[must_use]
pub(crate) fn compare_normalized(a: &str, b: &str) -> Ordering {
    compare(&normalize(a), &normalize(b))
}

/// Check that a version is well formed under an optional metadata pattern.
///
/// Every segment of the numeric part must be a non-negative integer. With
/// no pattern the version must carry no metadata; with one, its metadata
/// must match.
#[must_use]
pub fn is_valid_format(version: &str, metadata: Option<&MetadataPattern>) -> bool {
    Version::parse(version).is_some_and(|v| accepts_metadata(metadata, v.metadata()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("1.1.1", "1.1.2", Ordering::Less ; "patch")]
    #[test_case("1.1.1", "1.2.1", Ordering::Less ; "minor")]
    #[test_case("1.1.1", "2.1.1", Ordering::Less ; "major")]
    #[test_case("1.1", "1.2", Ordering::Less ; "two segments")]
    #[test_case("1", "2", Ordering::Less ; "one segment")]
    #[test_case("1.1", "1.1.1", Ordering::Less ; "shorter is lower")]
    #[test_case("1", "1.1", Ordering::Less ; "single is lower")]
    #[test_case("1.1", "1.1.0", Ordering::Less ; "shorter is lower even against zero")]
    #[test_case("9", "10", Ordering::Less ; "numeric not lexical")]
    #[test_case("25.0-jre", "29.0-jre", Ordering::Less ; "metadata ignored")]
    #[test_case("1.2.3", "1.2.3", Ordering::Equal ; "equal")]
    #[test_case("2.0.0", "1.9.9", Ordering::Greater ; "greater")]
    fn orders(a: &str, b: &str, expected: Ordering) {
        assert_eq!(compare(a, b), expected);
    }

    #[test]
    fn valid_format_without_pattern() {
        assert!(is_valid_format("1.1.1", None));
        assert!(is_valid_format("1.1", None));
        assert!(is_valid_format("1", None));
        assert!(is_valid_format("1.5.1.RELEASE", None));
        assert!(!is_valid_format("1.1.a", None));
        assert!(!is_valid_format("29.0-jre", None));
    }

    #[test]
    fn valid_format_with_pattern() {
        let jre = MetadataPattern::new("-jre").unwrap();
        assert!(is_valid_format("29.0-jre", Some(&jre)));
        assert!(!is_valid_format("29.0", Some(&jre)));
        assert!(!is_valid_format("29.0-android", Some(&jre)));
    }

    fn segments() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(0u64..20, 1..5)
    }

    proptest! {
        #[test]
        fn prop_prefix_is_lower(prefix in segments(), extra in segments()) {
            let mut longer = prefix.clone();
            longer.extend(extra);
            prop_assert_eq!(compare_segments(&prefix, &longer), Ordering::Less);
        }

        #[test]
        fn prop_antisymmetric(a in segments(), b in segments()) {
            prop_assert_eq!(compare_segments(&a, &b), compare_segments(&b, &a).reverse());
        }

        #[test]
        fn prop_transitive(a in segments(), b in segments(), c in segments()) {
            if compare_segments(&a, &b) != Ordering::Greater
                && compare_segments(&b, &c) != Ordering::Greater
            {
                prop_assert_ne!(compare_segments(&a, &c), Ordering::Greater);
            }
        }
    }
}
