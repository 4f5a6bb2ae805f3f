//! `latest.release` and `latest.patch`.

use super::{RangeContext, RangeKind};
use crate::error::{Error, Result};
use crate::metadata::is_pre_release;
use crate::version::Version;

pub(crate) const LATEST_RELEASE: &str = "latest.release";
pub(crate) const LATEST_PATCH: &str = "latest.patch";

/// Any release version.
///
/// Candidates must be well formed and pass the metadata gate; pre-release
/// tails such as `-SNAPSHOT` or `-rc1` are rejected even when a metadata
/// pattern would accept them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestRelease;

impl LatestRelease {
    /// Claims exactly `latest.release`.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        Ok((text == LATEST_RELEASE).then_some(Self))
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        !version.metadata().is_some_and(is_pre_release)
    }
}

/// A release on the same `major.minor` line as the current version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestPatch {
    major: u64,
    minor: u64,
}

impl LatestPatch {
    /// Claims exactly `latest.patch`. The context must carry a parseable
    /// current version.
    pub fn build(text: &str, context: &RangeContext<'_>) -> Result<Option<Self>> {
        if text != LATEST_PATCH {
            return Ok(None);
        }

        let current = context.current_version.ok_or_else(|| {
            Error::malformed(
                RangeKind::LatestPatch,
                text,
                "a current version is required",
            )
        })?;
        let current = Version::parse(current).ok_or_else(|| {
            Error::malformed(
                RangeKind::LatestPatch,
                text,
                format!("current version '{current}' is not a valid version"),
            )
        })?;

        Ok(Some(Self {
            major: current.major(),
            minor: current.minor(),
        }))
    }

    /// The `major.minor` line candidates must share.
    #[must_use]
    pub const fn line(&self) -> (u64, u64) {
        (self.major, self.minor)
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        LatestRelease.contains(version)
            && version.major() == self.major
            && version.minor() == self.minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_release(candidate: &str) -> bool {
        Version::parse(candidate).is_some_and(|v| LatestRelease.contains(&v))
    }

    #[test]
    fn release_rejects_pre_releases() {
        assert!(check_release("1.1.1"));
        assert!(check_release("29.0-jre"));
        assert!(!check_release("2.0.0-SNAPSHOT"));
        assert!(!check_release("5.0.0-M2"));
        assert!(!check_release("1.1.a"));
    }

    #[test]
    fn release_claims_only_keyword() {
        let context = RangeContext::new();
        assert!(LatestRelease::build("latest.release", &context).unwrap().is_some());
        assert!(LatestRelease::build("latest.patch", &context).unwrap().is_none());
        assert!(LatestRelease::build("LATEST.RELEASE", &context).unwrap().is_none());
    }

    #[test]
    fn patch_requires_current_version() {
        let err = LatestPatch::build("latest.patch", &RangeContext::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedConstraint { kind: RangeKind::LatestPatch, .. }
        ));

        let context = RangeContext::new().with_current_version("not-a-version");
        assert!(LatestPatch::build("latest.patch", &context).is_err());
    }

    #[test]
    fn patch_stays_on_line() {
        let context = RangeContext::new().with_current_version("1.2.3.RELEASE");
        let range = LatestPatch::build("latest.patch", &context).unwrap().unwrap();
        assert_eq!(range.line(), (1, 2));

        let check = |candidate: &str| Version::parse(candidate).is_some_and(|v| range.contains(&v));
        assert!(check("1.2.0"));
        assert!(check("1.2.99"));
        assert!(check("1.2"));
        assert!(!check("1.3.0"));
        assert!(!check("2.2.0"));
        assert!(!check("1.2.4-SNAPSHOT"));
    }

    #[test]
    fn patch_with_single_segment_current() {
        let context = RangeContext::new().with_current_version("3");
        let range = LatestPatch::build("latest.patch", &context).unwrap().unwrap();
        assert_eq!(range.line(), (3, 0));
    }
}
