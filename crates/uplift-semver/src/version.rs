//! Version parsing and normalization.
//!
//! Real-world version strings vary in segment count (`1`, `1.1`, `1.1.1`,
//! `1.1.1.1`) and carry vendor tails: a release token after the last dot
//! (`1.5.1.RELEASE`, `5.4.2.Final`) or metadata after the first `-` or `+`
//! (`29.0-jre`, `1.0+build.7`). This module splits those apart and provides
//! the canonical rewriting used by the normalized range variants.

use smallvec::SmallVec;
use std::fmt;

/// Release tokens that may trail the numeric part after a final `.`.
const RELEASE_SUFFIXES: [&str; 2] = ["RELEASE", "FINAL"];

/// Number of segments versions are padded to.
pub const CANONICAL_SEGMENTS: usize = 3;

/// Check whether a dot-separated token is a release suffix (case-insensitive).
#[must_use]
#[inline]
pub fn is_release_suffix(token: &str) -> bool {
    RELEASE_SUFFIXES
        .iter()
        .any(|suffix| token.eq_ignore_ascii_case(suffix))
}

/// Remove trailing release tokens (`.RELEASE`, `.Final`, ...).
///
/// Stacked tokens are all removed, so `1.2.RELEASE.RELEASE` becomes `1.2`.
/// Stripping only the last one would leave [`normalize`] with a second
/// token to strip on its next pass.
///
/// ```
/// use uplift_semver::strip_release_suffix;
///
/// assert_eq!(strip_release_suffix("1.5.1.RELEASE"), "1.5.1");
/// assert_eq!(strip_release_suffix("1.5.1.Final"), "1.5.1");
/// assert_eq!(strip_release_suffix("29.0-jre"), "29.0-jre");
/// ```
#[must_use]
pub fn strip_release_suffix(raw: &str) -> &str {
    let mut stripped = raw;
    while let Some((head, last)) = stripped.rsplit_once('.')
        && !head.is_empty()
        && is_release_suffix(last)
    {
        stripped = head;
    }
    stripped
}

/// Split at the first `-` or `+`. The separator stays with the metadata.
#[must_use]
pub(crate) fn split_metadata(raw: &str) -> (&str, Option<&str>) {
    match raw.find(['-', '+']) {
        Some(pos) => (&raw[..pos], Some(&raw[pos..])),
        None => (raw, None),
    }
}

/// Zero-fill the numeric part to three segments, keeping any metadata.
///
/// Release tokens are left in place; see [`normalize`] for the full rewrite.
#[must_use]
pub fn pad_segments(raw: &str) -> String {
    let (core, metadata) = split_metadata(raw);
    if core.is_empty() {
        return raw.to_string();
    }

    let missing = CANONICAL_SEGMENTS.saturating_sub(core.split('.').count());
    let mut padded = String::with_capacity(raw.len() + missing * 2);
    padded.push_str(core);
    for _ in 0..missing {
        padded.push_str(".0");
    }
    if let Some(metadata) = metadata {
        padded.push_str(metadata);
    }
    padded
}

/// Canonicalize a raw version string.
///
/// Strips a trailing release token, then pads the numeric part to three
/// segments. Other metadata is preserved verbatim. Idempotent.
///
/// ```
/// use uplift_semver::normalize;
///
/// assert_eq!(normalize("1.5.1.RELEASE"), "1.5.1");
/// assert_eq!(normalize("29.0"), "29.0.0");
/// assert_eq!(normalize("29.0-jre"), "29.0.0-jre");
/// assert_eq!(normalize("29-jre"), "29.0.0-jre");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    pad_segments(strip_release_suffix(raw.trim()).trim_end())
}

/// A parsed version: numeric segments plus an optional metadata suffix.
///
/// Versions are immutable and cheap to build; they are created fresh for
/// each check rather than cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    segments: SmallVec<[u64; 4]>,
    /// Everything from the first `-` or `+`, separator included.
    metadata: Option<String>,
    /// Whether a release token was stripped while parsing.
    release_suffix: bool,
}

impl Version {
    /// Build a plain version from numeric segments.
    ///
    /// An empty slice yields `0`.
    #[must_use]
    pub fn from_segments(segments: &[u64]) -> Self {
        let mut segments: SmallVec<[u64; 4]> = SmallVec::from_slice(segments);
        if segments.is_empty() {
            segments.push(0);
        }
        Self {
            segments,
            metadata: None,
            release_suffix: false,
        }
    }

    /// Parse a version string strictly.
    ///
    /// Every dot-separated segment of the numeric part must be a
    /// non-negative integer. Returns `None` for anything else.
    ///
    /// ```
    /// use uplift_semver::Version;
    ///
    /// let v = Version::parse("1.5.1.RELEASE").unwrap();
    /// assert_eq!(v.segments(), &[1, 5, 1]);
    /// assert!(v.has_release_suffix());
    ///
    /// let v = Version::parse("29.0-jre").unwrap();
    /// assert_eq!(v.metadata(), Some("-jre"));
    ///
    /// assert!(Version::parse("1.1.a").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let stripped = strip_release_suffix(input);
        let (core, metadata) = split_metadata(stripped);

        // A bare separator with nothing after it is not metadata.
        if metadata.is_some_and(|m| m.len() < 2) {
            return None;
        }

        let segments = parse_segments(core)?;

        Some(Self {
            segments,
            metadata: metadata.map(str::to_string),
            release_suffix: stripped.len() != input.len(),
        })
    }

    /// Parse as much of a version as possible.
    ///
    /// Keeps the leading run of numeric segments and treats the rest as
    /// metadata. Never fails; used where an ordering is needed even for
    /// inputs that would not pass validation.
    #[must_use]
    pub fn lenient(input: &str) -> Self {
        let input = input.trim();
        let stripped = strip_release_suffix(input);
        let (core, metadata) = split_metadata(stripped);

        let mut segments = SmallVec::new();
        let mut parts = core.split('.');
        let mut rest = Vec::new();
        for part in parts.by_ref() {
            if let Some(value) = parse_segment(part) {
                segments.push(value);
            } else {
                rest.push(part);
                break;
            }
        }
        rest.extend(parts);
        let rest = rest.join(".");

        let metadata = match metadata {
            Some(metadata) => Some(format!("{rest}{metadata}")),
            None if !rest.is_empty() => Some(rest),
            None => None,
        };

        Self {
            segments,
            metadata,
            release_suffix: stripped.len() != input.len(),
        }
    }

    /// Numeric segments in order.
    #[must_use]
    #[inline]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Metadata suffix including its leading separator.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Whether a `.RELEASE`/`.Final` token was stripped.
    #[must_use]
    #[inline]
    pub const fn has_release_suffix(&self) -> bool {
        self.release_suffix
    }

    /// Major segment.
    #[must_use]
    pub fn major(&self) -> u64 {
        self.segment(0)
    }

    /// Minor segment, `0` when absent.
    #[must_use]
    pub fn minor(&self) -> u64 {
        self.segment(1)
    }

    /// Patch segment, `0` when absent.
    #[must_use]
    pub fn patch(&self) -> u64 {
        self.segment(2)
    }

    fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    /// Copy of this version with at least three segments.
    #[must_use]
    pub fn padded(&self) -> Self {
        let mut padded = self.clone();
        while padded.segments.len() < CANONICAL_SEGMENTS {
            padded.segments.push(0);
        }
        padded
    }
}

impl fmt::Display for Version {
    /// Writes the canonical form: segments, then metadata. Release tokens
    /// are not reproduced.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        if let Some(metadata) = &self.metadata {
            f.write_str(metadata)?;
        }
        Ok(())
    }
}

fn parse_segment(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_segments(core: &str) -> Option<SmallVec<[u64; 4]>> {
    if core.is_empty() {
        return None;
    }
    core.split('.').map(parse_segment).collect()
}
