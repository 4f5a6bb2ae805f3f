//! Bracketed set ranges: `[1.0,2.0)`, `(,1.5]`, `[1.5,)`, `[1.0]`.

use super::{RangeContext, RangeKind, parse_bound};
use crate::comparator::compare_segments;
use crate::error::{Error, Result};
use crate::version::Version;
use std::cmp::Ordering;

/// One end of a set range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    /// Bound version, padded.
    pub version: Version,
    /// `[` / `]` rather than `(` / `)`.
    pub inclusive: bool,
}

/// An interval written with brackets. An empty side is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRange {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl SetRange {
    /// Claims text opening with `[` or `(`.
    pub fn build(text: &str, _context: &RangeContext<'_>) -> Result<Option<Self>> {
        let open_inclusive = match text.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Ok(None),
        };
        let close_inclusive = match text.chars().last() {
            Some(']') if text.len() > 1 => true,
            Some(')') if text.len() > 1 => false,
            _ => {
                return Err(Error::malformed(
                    RangeKind::Set,
                    text,
                    "missing closing ']' or ')'",
                ));
            }
        };
        let inner = &text[1..text.len() - 1];

        let Some((lower, upper)) = inner.split_once(',') else {
            // `[1.0]` pins a single version.
            if !(open_inclusive && close_inclusive) {
                return Err(Error::malformed(
                    RangeKind::Set,
                    text,
                    "a single version must use '[' and ']'",
                ));
            }
            let version = parse_bound(inner.trim(), "pinned", RangeKind::Set, text)?;
            return Ok(Some(Self {
                lower: Some(Bound {
                    version: version.clone(),
                    inclusive: true,
                }),
                upper: Some(Bound {
                    version,
                    inclusive: true,
                }),
            }));
        };

        if upper.contains(',') {
            return Err(Error::malformed(
                RangeKind::Set,
                text,
                "expected at most two bounds",
            ));
        }

        let bound = |side: &str, name: &str, inclusive: bool| -> Result<Option<Bound>> {
            let side = side.trim();
            if side.is_empty() {
                return Ok(None);
            }
            Ok(Some(Bound {
                version: parse_bound(side, name, RangeKind::Set, text)?,
                inclusive,
            }))
        };
        let lower = bound(lower, "lower", open_inclusive)?;
        let upper = bound(upper, "upper", close_inclusive)?;

        if lower.is_none() && upper.is_none() {
            return Err(Error::malformed(
                RangeKind::Set,
                text,
                "at least one bound is required",
            ));
        }
        if let (Some(lower), Some(upper)) = (&lower, &upper)
            && compare_segments(lower.version.segments(), upper.version.segments())
                == Ordering::Greater
        {
            return Err(Error::malformed(
                RangeKind::Set,
                text,
                "lower bound is above upper bound",
            ));
        }

        Ok(Some(Self { lower, upper }))
    }

    /// Lower bound, `None` if unbounded.
    #[must_use]
    pub const fn lower(&self) -> Option<&Bound> {
        self.lower.as_ref()
    }

    /// Upper bound, `None` if unbounded.
    #[must_use]
    pub const fn upper(&self) -> Option<&Bound> {
        self.upper.as_ref()
    }

    /// Check a candidate.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        let version = version.padded();
        if let Some(lower) = &self.lower {
            match compare_segments(version.segments(), lower.version.segments()) {
                Ordering::Less => return false,
                Ordering::Equal if !lower.inclusive => return false,
                _ => {}
            }
        }
        if let Some(upper) = &self.upper {
            match compare_segments(version.segments(), upper.version.segments()) {
                Ordering::Greater => return false,
                Ordering::Equal if !upper.inclusive => return false,
                _ => {}
            }
        }
        true
    }
}
