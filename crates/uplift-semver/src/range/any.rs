//! Matches every version.

use super::RangeContext;
use crate::error::Result;
use crate::version::Version;

/// `*`, `x`, `X` or `+`.
///
/// Still subject to the metadata gate applied by the owning constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyVersion;

impl AnyVersion {
    /// Claims a lone wildcard.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        Ok(matches!(text, "*" | "x" | "X" | "+").then_some(Self))
    }

    /// Always true.
    #[must_use]
    pub const fn contains(&self, _version: &Version) -> bool {
        true
    }
}
