//! Caret ranges: `^1.2.3`, `^0.2`, `^1.x`, `^0.0.*`.

use super::{PartialVersion, RangeContext, RangeKind, in_half_open, next_line};
use crate::error::Result;
use crate::version::Version;

/// Allows changes that do not modify the left-most non-zero segment.
///
/// The exclusive upper bound is chosen by the first rule that applies:
///
/// 1. major is not zero: `^1.2.3` := `>=1.2.3 <2.0.0`
/// 2. minor is not zero: `^0.2.3` := `>=0.2.3 <0.3.0`
/// 3. minor is a wildcard: `^0.x` := `>=0.0.0 <1.0.0`
/// 4. patch is a wildcard: `^0.0.x` := `>=0.0.0 <0.1.0`
/// 5. otherwise the range is degenerate: `^0.0.3` admits nothing, not even
///    `0.0.3`. No automatic update is safe for that shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretRange {
    lower: Version,
    /// `None` for a degenerate range.
    upper: Option<Version>,
}

impl CaretRange {
    /// Claims text starting with `^`.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        let Some(body) = text.strip_prefix('^') else {
            return Ok(None);
        };

        let partial = PartialVersion::parse(body.trim(), RangeKind::Caret, text)?;
        let bump = match partial {
            PartialVersion { major, .. } if major != 0 => Some((major, None)),
            PartialVersion { minor: Some(minor), .. } if minor != 0 => Some((0, Some(minor))),
            PartialVersion { minor: None, .. } => Some((0, None)),
            PartialVersion { patch: None, .. } => Some((0, Some(0))),
            _ => None,
        };
        let upper = bump
            .map(|(major, minor)| next_line(major, minor, RangeKind::Caret, text))
            .transpose()?;

        Ok(Some(Self {
            lower: partial.floor(),
            upper,
        }))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn lower(&self) -> &Version {
        &self.lower
    }

    /// Exclusive upper bound, `None` if degenerate.
    #[must_use]
    pub const fn upper(&self) -> Option<&Version> {
        self.upper.as_ref()
    }

    /// Whether the range admits no version at all.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.upper.is_none()
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        self.upper
            .as_ref()
            .is_some_and(|upper| in_half_open(version, &self.lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn caret(text: &str) -> CaretRange {
        CaretRange::build(text, &RangeContext::new())
            .unwrap()
            .unwrap()
    }

    fn bounds(text: &str) -> (String, Option<String>) {
        let range = caret(text);
        (
            range.lower().to_string(),
            range.upper().map(ToString::to_string),
        )
    }

    #[test]
    fn upper_bound_precedence() {
        assert_eq!(bounds("^1.2.3"), ("1.2.3".into(), Some("2.0.0".into())));
        assert_eq!(bounds("^0.2.3"), ("0.2.3".into(), Some("0.3.0".into())));
        assert_eq!(bounds("^0.x"), ("0.0.0".into(), Some("1.0.0".into())));
        assert_eq!(bounds("^0"), ("0.0.0".into(), Some("1.0.0".into())));
        assert_eq!(bounds("^0.0.x"), ("0.0.0".into(), Some("0.1.0".into())));
        assert_eq!(bounds("^0.0"), ("0.0.0".into(), Some("0.1.0".into())));
        assert_eq!(bounds("^1.x"), ("1.0.0".into(), Some("2.0.0".into())));
        assert_eq!(bounds("^0.0.3"), ("0.0.3".into(), None));
        assert_eq!(bounds("^0.0.0"), ("0.0.0".into(), None));
    }

    #[test]
    fn degenerate_admits_nothing() {
        let range = caret("^0.0.3");
        assert!(range.is_degenerate());
        for candidate in ["0.0.3", "0.0.4", "0.0.2", "0.1.0"] {
            assert!(!range.contains(&Version::parse(candidate).unwrap()), "{candidate}");
        }
    }

    #[test]
    fn short_candidates_are_padded() {
        let range = caret("^1.2.3");
        assert!(!range.contains(&Version::parse("2").unwrap()));
        assert!(range.contains(&Version::parse("1.3").unwrap()));
    }

    #[test]
    fn largest_major_has_no_upper_bound() {
        let err = CaretRange::build("^18446744073709551615", &RangeContext::new()).unwrap_err();
        assert!(
            matches!(err, Error::MalformedConstraint { kind: RangeKind::Caret, .. }),
            "{err}"
        );
        assert_eq!(
            bounds("^18446744073709551614").1.as_deref(),
            Some("18446744073709551615.0.0")
        );
    }

    #[test]
    fn declines_without_caret() {
        assert!(CaretRange::build("1.2.3", &RangeContext::new()).unwrap().is_none());
    }
}
