//! Wildcard ranges: `1.x`, `1.2.*`, `1.2.X`.

use super::{PartialVersion, RangeContext, RangeKind, in_half_open, is_wildcard, next_line};
use crate::error::{Error, Result};
use crate::version::{Version, split_metadata};

/// A version with trailing wildcard segments.
///
/// - `1.x` := `>=1.0.0 <2.0.0`
/// - `1.2.*` := `>=1.2.0 <1.3.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRange {
    lower: Version,
    upper: Version,
}

impl XRange {
    /// Claims text that starts with a digit, contains no whitespace and has
    /// at least one wildcard segment.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        let (core, metadata) = split_metadata(text);
        if !text.starts_with(|c: char| c.is_ascii_digit())
            || text.contains(char::is_whitespace)
            || !core.split('.').any(is_wildcard)
        {
            return Ok(None);
        }

        if metadata.is_some() {
            return Err(Error::malformed(
                RangeKind::XRange,
                text,
                "wildcard versions cannot carry metadata",
            ));
        }

        let partial = PartialVersion::parse(core, RangeKind::XRange, text)?;
        Ok(Some(Self {
            lower: partial.floor(),
            upper: next_line(partial.major, partial.minor, RangeKind::XRange, text)?,
        }))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn lower(&self) -> &Version {
        &self.lower
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn upper(&self) -> &Version {
        &self.upper
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        in_half_open(version, &self.lower, &self.upper)
    }
}
