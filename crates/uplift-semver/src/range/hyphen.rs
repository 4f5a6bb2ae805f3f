//! Hyphen ranges: `1.2.3 - 2.3.4`.

use super::{RangeContext, RangeKind, parse_bound};
use crate::comparator::compare_segments;
use crate::error::Result;
use crate::version::Version;
use std::cmp::Ordering;

const SEPARATOR: &str = " - ";

/// An inclusive set between two versions.
///
/// Both bounds are zero-padded, so `1.2 - 2` := `>=1.2.0 <=2.0.0`.
/// Candidates are normalized before comparison, so `1.2.3.RELEASE` sits on
/// a lower bound of `1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenRange {
    lower: Version,
    upper: Version,
}

impl HyphenRange {
    /// Claims text containing ` - `; the split happens at the first one.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        let Some((lower, upper)) = text.split_once(SEPARATOR) else {
            return Ok(None);
        };

        Ok(Some(Self {
            lower: parse_bound(lower.trim(), "lower", RangeKind::Hyphen, text)?,
            upper: parse_bound(upper.trim(), "upper", RangeKind::Hyphen, text)?,
        }))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn lower(&self) -> &Version {
        &self.lower
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn upper(&self) -> &Version {
        &self.upper
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        let version = version.padded();
        compare_segments(version.segments(), self.lower.segments()) != Ordering::Less
            && compare_segments(version.segments(), self.upper.segments()) != Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hyphen(text: &str) -> HyphenRange {
        HyphenRange::build(text, &RangeContext::new()).unwrap().unwrap()
    }

    fn check(range: &HyphenRange, candidate: &str) -> bool {
        Version::parse(candidate).is_some_and(|v| range.contains(&v))
    }

    #[test]
    fn inclusive_set() {
        let range = hyphen("1.2.3 - 2.3.4");
        assert!(!check(&range, "1.2.2"));
        assert!(check(&range, "1.2.3.RELEASE"));
        assert!(check(&range, "1.2.3"));
        assert!(check(&range, "2.3.4"));
        assert!(!check(&range, "2.3.5"));
    }

    #[test]
    fn partial_versions_are_padded() {
        let range = hyphen("1.2 - 2");
        assert_eq!(range.lower().to_string(), "1.2.0");
        assert_eq!(range.upper().to_string(), "2.0.0");
        assert!(!check(&range, "1.1.9"));
        assert!(check(&range, "1.2.0"));
        assert!(check(&range, "2.0.0"));
        assert!(check(&range, "2"));
        assert!(!check(&range, "2.0.1"));
    }

    #[test]
    fn requires_spaced_hyphen() {
        assert!(HyphenRange::build("1.2.3-2.3.4", &RangeContext::new()).unwrap().is_none());
    }

    #[test]
    fn malformed_bounds() {
        assert!(HyphenRange::build("1.2.3 - two", &RangeContext::new()).is_err());
        assert!(HyphenRange::build(" - 2.0", &RangeContext::new()).is_err());
        assert!(HyphenRange::build("1.0-jre - 2.0", &RangeContext::new()).is_err());
    }
}
