//! A single pinned version.

use super::{RangeContext, RangeKind, is_wildcard};
use crate::error::{Error, Result};
use crate::version::{Version, split_metadata};

/// Characters that belong to other constraint syntaxes.
const OPERATOR_CHARS: &[char] = &[',', '|', '<', '>', '=', '!', '[', ']', '(', ')', '^', '~'];

/// Matches exactly one version, compared on normalized form.
///
/// `1.2` matches `1.2.0` and `1.2.0.RELEASE`. Metadata must be identical:
/// `29.0-jre` matches `29.0.0-jre` but not `29.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactVersion {
    version: Version,
}

impl ExactVersion {
    /// Claims text that starts with a digit and contains no whitespace,
    /// operator or wildcard segment.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        if !text.starts_with(|c: char| c.is_ascii_digit())
            || text.contains(char::is_whitespace)
            || text.contains(OPERATOR_CHARS)
            || split_metadata(text).0.split('.').any(is_wildcard)
        {
            return Ok(None);
        }

        let version = Version::parse(text).ok_or_else(|| {
            Error::malformed(RangeKind::Exact, text, "not a valid version")
        })?;

        Ok(Some(Self {
            version: version.padded(),
        }))
    }

    /// The pinned version, padded.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        let version = version.padded();
        version.segments() == self.version.segments()
            && version.metadata() == self.version.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(text: &str) -> ExactVersion {
        ExactVersion::build(text, &RangeContext::new())
            .unwrap()
            .unwrap()
    }

    fn check(range: &ExactVersion, candidate: &str) -> bool {
        Version::parse(candidate).is_some_and(|v| range.contains(&v))
    }

    #[test]
    fn matches_normalized_equal() {
        let range = exact("1.2");
        assert!(check(&range, "1.2"));
        assert!(check(&range, "1.2.0"));
        assert!(check(&range, "1.2.0.RELEASE"));
        assert!(!check(&range, "1.2.1"));
        assert!(!check(&range, "1.2.0.1"));
    }

    #[test]
    fn metadata_must_be_identical() {
        let range = exact("29.0-jre");
        assert!(check(&range, "29.0.0-jre"));
        assert!(!check(&range, "29.0"));
        assert!(!check(&range, "29.0-android"));
    }

    #[test]
    fn declines_other_syntaxes() {
        for text in ["^1.0", "~1.0", "1.x", "1.2.*", "1 - 2", "[1,2)", "latest.release", "*", ">=1", ""] {
            assert!(
                ExactVersion::build(text, &RangeContext::new()).unwrap().is_none(),
                "{text:?} should be declined"
            );
        }
    }

    #[test]
    fn malformed_version() {
        assert!(ExactVersion::build("1.2.a", &RangeContext::new()).is_err());
        assert!(ExactVersion::build("1..2", &RangeContext::new()).is_err());
    }
}
