//! Tilde ranges: `~1.2.3`, `~1.2`, `~1`.

use super::{PartialVersion, RangeContext, RangeKind, in_half_open, next_line};
use crate::error::Result;
use crate::version::Version;

/// Allows patch-level changes when a minor is given, minor-level otherwise.
///
/// - `~1.2.3` := `>=1.2.3 <1.3.0`
/// - `~1.2` := `>=1.2.0 <1.3.0`
/// - `~1`, `~1.x` := `>=1.0.0 <2.0.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TildeRange {
    lower: Version,
    upper: Version,
}

impl TildeRange {
    /// Claims text starting with `~`.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        let Some(body) = text.strip_prefix('~') else {
            return Ok(None);
        };

        let partial = PartialVersion::parse(body.trim(), RangeKind::Tilde, text)?;
        Ok(Some(Self {
            lower: partial.floor(),
            upper: next_line(partial.major, partial.minor, RangeKind::Tilde, text)?,
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
