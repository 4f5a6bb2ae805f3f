//! Version constraints and the syntax dispatcher.
//!
//! A constraint string may be written in any of several syntaxes with no
//! tag saying which. Each range variant knows its own lexical shape and
//! either declines the text (`Ok(None)`), builds itself (`Ok(Some(_))`), or
//! reports that it recognized the shape but the content is malformed
//! (`Err(_)`). The dispatcher tries variants in a fixed order and stops at
//! the first that does not decline:
//!
//! | Syntax                     | Variant         |
//! |----------------------------|-----------------|
//! | `1.2.3`, `29.0-jre`        | exact           |
//! | `latest.release`           | latest release  |
//! | `latest.patch`             | latest patch    |
//! | `^1.2.3`, `^1.x`           | caret           |
//! | `~1.2.3`, `~1.2`           | tilde           |
//! | `1.2.3 - 2.3.4`            | hyphen          |
//! | `1.x`, `1.2.*`             | x-range         |
//! | `[1.0,2.0)`, `(,1.5]`      | set             |
//! | `*`, `x`, `+`              | any             |

mod any;
mod caret;
mod exact;
mod hyphen;
mod latest;
mod set;
mod tilde;
mod xrange;

pub use any::AnyVersion;
pub use caret::CaretRange;
pub use exact::ExactVersion;
pub use hyphen::HyphenRange;
pub use latest::{LatestPatch, LatestRelease};
pub use set::{Bound, SetRange};
pub use tilde::TildeRange;
pub use xrange::XRange;

use crate::comparator::{self, compare_segments};
use crate::error::{Error, Result};
use crate::metadata::{MetadataPattern, accepts_metadata};
use crate::version::Version;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Identifies a constraint syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// A single version.
    Exact,
    /// `latest.release`.
    LatestRelease,
    /// `latest.patch`.
    LatestPatch,
    /// `^x.y.z`.
    Caret,
    /// `~x.y.z`.
    Tilde,
    /// `a - b`.
    Hyphen,
    /// `x.y.*`.
    XRange,
    /// `[a,b)`.
    Set,
    /// `*`.
    Any,
}

impl RangeKind {
    /// Order in which the dispatcher tries each syntax.
    pub const DISPATCH_ORDER: [Self; 9] = [
        Self::Exact,
        Self::LatestRelease,
        Self::LatestPatch,
        Self::Caret,
        Self::Tilde,
        Self::Hyphen,
        Self::XRange,
        Self::Set,
        Self::Any,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact version",
            Self::LatestRelease => "latest.release",
            Self::LatestPatch => "latest.patch",
            Self::Caret => "caret range",
            Self::Tilde => "tilde range",
            Self::Hyphen => "hyphen range",
            Self::XRange => "x-range",
            Self::Set => "set range",
            Self::Any => "any version",
        }
    }

    fn build(self, text: &str, context: &RangeContext<'_>) -> Result<Option<Range>> {
        Ok(match self {
            Self::Exact => ExactVersion::build(text, context)?.map(Range::Exact),
            Self::LatestRelease => LatestRelease::build(text, context)?.map(Range::LatestRelease),
            Self::LatestPatch => LatestPatch::build(text, context)?.map(Range::LatestPatch),
            Self::Caret => CaretRange::build(text, context)?.map(Range::Caret),
            Self::Tilde => TildeRange::build(text, context)?.map(Range::Tilde),
            Self::Hyphen => HyphenRange::build(text, context)?.map(Range::Hyphen),
            Self::XRange => XRange::build(text, context)?.map(Range::XRange),
            Self::Set => SetRange::build(text, context)?.map(Range::Set),
            Self::Any => AnyVersion::build(text, context)?.map(Range::Any),
        })
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional inputs that inform how a constraint is built.
///
/// Most variants ignore the current version; `latest.patch` requires it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeContext<'a> {
    /// The version currently in use.
    pub current_version: Option<&'a str>,
    /// Required metadata suffix pattern, e.g. `-jre`.
    pub metadata_pattern: Option<&'a str>,
}

impl<'a> RangeContext<'a> {
    /// An empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_version: None,
            metadata_pattern: None,
        }
    }

    /// Set the current version.
    #[must_use]
    pub const fn with_current_version(mut self, version: &'a str) -> Self {
        self.current_version = Some(version);
        self
    }

    /// Set the metadata pattern.
    #[must_use]
    pub const fn with_metadata_pattern(mut self, pattern: &'a str) -> Self {
        self.metadata_pattern = Some(pattern);
        self
    }
}

/// The parsed bounds of one constraint syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    /// A single version.
    Exact(ExactVersion),
    /// Newest release.
    LatestRelease(LatestRelease),
    /// Newest patch of the current minor line.
    LatestPatch(LatestPatch),
    /// `^x.y.z`.
    Caret(CaretRange),
    /// `~x.y.z`.
    Tilde(TildeRange),
    /// `a - b`.
    Hyphen(HyphenRange),
    /// `x.y.*`.
    XRange(XRange),
    /// `[a,b)`.
    Set(SetRange),
    /// Anything.
    Any(AnyVersion),
}

impl Range {
    /// Syntax this range was parsed from.
    #[must_use]
    pub const fn kind(&self) -> RangeKind {
        match self {
            Self::Exact(_) => RangeKind::Exact,
            Self::LatestRelease(_) => RangeKind::LatestRelease,
            Self::LatestPatch(_) => RangeKind::LatestPatch,
            Self::Caret(_) => RangeKind::Caret,
            Self::Tilde(_) => RangeKind::Tilde,
            Self::Hyphen(_) => RangeKind::Hyphen,
            Self::XRange(_) => RangeKind::XRange,
            Self::Set(_) => RangeKind::Set,
            Self::Any(_) => RangeKind::Any,
        }
    }

    /// Check a parsed candidate against the bounds.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        match self {
            Self::Exact(range) => range.contains(version),
            Self::LatestRelease(range) => range.contains(version),
            Self::LatestPatch(range) => range.contains(version),
            Self::Caret(range) => range.contains(version),
            Self::Tilde(range) => range.contains(version),
            Self::Hyphen(range) => range.contains(version),
            Self::XRange(range) => range.contains(version),
            Self::Set(range) => range.contains(version),
            Self::Any(range) => range.contains(version),
        }
    }
}

/// A parsed, immutable version constraint.
///
/// Classifies candidate versions as valid or not and orders them. The
/// ordering is the plain version ordering whatever the syntax; constraints
/// filter, they do not reorder.
///
/// ```
/// use uplift_semver::{Constraint, RangeContext};
///
/// let caret = Constraint::parse("^1.2.3", &RangeContext::new()).unwrap();
/// assert!(caret.is_valid("1.9.0"));
/// assert!(!caret.is_valid("2.0.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    range: Range,
    metadata: Option<MetadataPattern>,
    original: Arc<str>,
}

impl Constraint {
    /// Parse constraint text, trying each syntax in dispatch order.
    ///
    /// Returns [`Error::UnrecognizedSyntax`] if no syntax claims the text
    /// and [`Error::MalformedConstraint`] if one claims it but cannot
    /// parse it. A malformed constraint is not retried against later
    /// syntaxes.
    pub fn parse(text: &str, context: &RangeContext<'_>) -> Result<Self> {
        let metadata = context
            .metadata_pattern
            .map(MetadataPattern::new)
            .transpose()?;
        let trimmed = text.trim();

        for kind in RangeKind::DISPATCH_ORDER {
            match kind.build(trimmed, context) {
                Ok(Some(range)) => {
                    debug!(kind = %kind, constraint = trimmed, "parsed constraint");
                    return Ok(Self {
                        range,
                        metadata,
                        original: Arc::from(trimmed),
                    });
                }
                Ok(None) => trace!(kind = %kind, constraint = trimmed, "syntax declined"),
                Err(err) => {
                    debug!(kind = %kind, constraint = trimmed, error = %err, "malformed constraint");
                    return Err(err);
                }
            }
        }

        debug!(constraint = trimmed, "no constraint grammar matched");
        Err(Error::UnrecognizedSyntax {
            constraint: text.to_string(),
        })
    }

    /// `latest.release`, optionally restricted to a metadata pattern.
    pub fn latest_release(metadata_pattern: Option<&str>) -> Result<Self> {
        let context = RangeContext {
            current_version: None,
            metadata_pattern,
        };
        Self::parse(latest::LATEST_RELEASE, &context)
    }

    /// `latest.patch` relative to `current_version`.
    pub fn latest_patch(current_version: &str, metadata_pattern: Option<&str>) -> Result<Self> {
        let context = RangeContext {
            current_version: Some(current_version),
            metadata_pattern,
        };
        Self::parse(latest::LATEST_PATCH, &context)
    }

    /// Check whether a candidate version satisfies this constraint.
    ///
    /// Malformed candidates are never valid.
    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        let Some(version) = Version::parse(candidate) else {
            return false;
        };
        match &self.range {
            // Exact versions compare their metadata literally.
            Range::Exact(exact) => exact.contains(&version),
            range => {
                accepts_metadata(self.metadata.as_ref(), version.metadata())
                    && range.contains(&version)
            }
        }
    }

    /// Order two version strings on their normalized form.
    ///
    /// Every syntax shares this ordering, so `1.2` and `1.2.0` tie here just
    /// as they do in [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        comparator::compare_normalized(a, b)
    }

    /// Syntax this constraint was parsed from.
    #[must_use]
    pub const fn kind(&self) -> RangeKind {
        self.range.kind()
    }

    /// Parsed bounds.
    #[must_use]
    pub const fn range(&self) -> &Range {
        &self.range
    }

    /// Metadata pattern, if one was configured.
    #[must_use]
    pub const fn metadata_pattern(&self) -> Option<&MetadataPattern> {
        self.metadata.as_ref()
    }

    /// Constraint text as parsed (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Parse a constraint with an optional current version.
///
/// Shorthand for [`Constraint::parse`] without a metadata pattern.
pub fn parse(text: &str, current_version: Option<&str>) -> Result<Constraint> {
    let context = RangeContext {
        current_version,
        metadata_pattern: None,
    };
    Constraint::parse(text, &context)
}

// Shared parsing helpers for the range variants.

/// `x`, `X` or `*`.
pub(crate) fn is_wildcard(part: &str) -> bool {
    matches!(part, "x" | "X" | "*")
}

/// A version whose trailing segments may be wildcards or omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PartialVersion {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

impl PartialVersion {
    /// Parse `1`, `1.2`, `1.2.3`, `1.x`, `1.2.*`, ...
    ///
    /// Once a segment is a wildcard, every later segment must be one too.
    pub fn parse(body: &str, kind: RangeKind, constraint: &str) -> Result<Self> {
        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() > 3 {
            return Err(Error::malformed(
                kind,
                constraint,
                "expected at most three segments",
            ));
        }

        let major = match parts[0] {
            part if is_wildcard(part) => {
                return Err(Error::malformed(
                    kind,
                    constraint,
                    "major version cannot be a wildcard",
                ));
            }
            part => number(part, "major", kind, constraint)?,
        };

        let mut wildcard_seen = false;
        let mut rest = [None, None];
        for (slot, (part, name)) in rest
            .iter_mut()
            .zip(parts.iter().skip(1).zip(["minor", "patch"]))
        {
            if is_wildcard(part) {
                wildcard_seen = true;
            } else if wildcard_seen {
                return Err(Error::malformed(
                    kind,
                    constraint,
                    format!("{name} segment '{part}' follows a wildcard"),
                ));
            } else {
                *slot = Some(number(part, name, kind, constraint)?);
            }
        }

        // An omitted minor makes the patch a wildcard too.
        let [minor, patch] = rest;
        Ok(Self {
            major,
            minor,
            patch: minor.and(patch),
        })
    }

    /// Lowest version the partial admits; wildcards become zero.
    pub fn floor(&self) -> Version {
        Version::from_segments(&[
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        ])
    }
}

fn number(part: &str, name: &str, kind: RangeKind, constraint: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            kind,
            constraint,
            format!("{name} segment '{part}' is not a number"),
        ));
    }
    part.parse().map_err(|_| {
        Error::malformed(
            kind,
            constraint,
            format!("{name} segment '{part}' is out of range"),
        )
    })
}

/// Parse a plain numeric bound and pad it to three segments.
pub(crate) fn parse_bound(
    text: &str,
    side: &str,
    kind: RangeKind,
    constraint: &str,
) -> Result<Version> {
    match Version::parse(text) {
        Some(version) if version.metadata().is_none() => Ok(version.padded()),
        _ => Err(Error::malformed(
            kind,
            constraint,
            format!("{side} bound '{text}' is not a version"),
        )),
    }
}

/// `lower <= version < upper` on padded versions.
pub(crate) fn in_half_open(version: &Version, lower: &Version, upper: &Version) -> bool {
    let version = version.padded();
    compare_segments(version.segments(), lower.segments()) != Ordering::Less
        && compare_segments(version.segments(), upper.segments()) == Ordering::Less
}

/// The next version after bumping `major`, or `major.minor` when given.
///
/// A bump past `u64::MAX` has no successor and is malformed.
pub(crate) fn next_line(
    major: u64,
    minor: Option<u64>,
    kind: RangeKind,
    constraint: &str,
) -> Result<Version> {
    let segments = match minor {
        Some(minor) => minor.checked_add(1).map(|next| [major, next, 0]),
        None => major.checked_add(1).map(|next| [next, 0, 0]),
    };
    segments.map(|segments| Version::from_segments(&segments)).ok_or_else(|| {
        Error::malformed(
            kind,
            constraint,
            format!("upper bound overflows {}", u64::MAX),
        )
    })
}
