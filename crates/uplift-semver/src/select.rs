//! Picking the best candidate from a list of available versions.

use crate::comparator;
use crate::range::Constraint;
use crate::version::Version;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Something that filters and orders version strings.
pub trait VersionComparator {
    /// Whether `candidate` is acceptable.
    fn is_valid(&self, candidate: &str) -> bool;

    /// Order two version strings.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl VersionComparator for Constraint {
    fn is_valid(&self, candidate: &str) -> bool {
        Self::is_valid(self, candidate)
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        Self::compare(self, a, b)
    }
}

/// Accepts any well-formed version and orders on normalized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl VersionComparator for NaturalOrder {
    fn is_valid(&self, candidate: &str) -> bool {
        Version::parse(candidate).is_some()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        comparator::compare_normalized(a, b)
    }
}

/// The intersection of several constraints.
///
/// A candidate is valid only if every member accepts it. Ordering comes
/// from the first member, or the natural order when the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create a set from constraints.
    #[must_use]
    pub const fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    /// Add a constraint.
    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Member constraints in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl VersionComparator for ConstraintSet {
    fn is_valid(&self, candidate: &str) -> bool {
        if self.constraints.is_empty() {
            return NaturalOrder.is_valid(candidate);
        }
        self.constraints.iter().all(|c| c.is_valid(candidate))
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.constraints.first() {
            Some(first) => first.compare(a, b),
            None => NaturalOrder.compare(a, b),
        }
    }
}

/// Return the highest valid candidate.
///
/// Candidates equal under the comparator keep the one listed first, so
/// `1.2` wins over a later `1.2.0.RELEASE` under a normalizing constraint.
///
/// ```
/// use uplift_semver::{parse, select_best};
///
/// let caret = parse("^1.2.3", None).unwrap();
/// let best = select_best(&caret, &["1.2.3", "1.9.0", "2.0.0", "1.2.4"]);
/// assert_eq!(best, Some("1.9.0"));
/// ```
pub fn select_best<'a, C, S>(comparator: &C, candidates: &'a [S]) -> Option<&'a str>
where
    C: VersionComparator + ?Sized,
    S: AsRef<str>,
{
    let mut best: Option<&'a str> = None;
    for candidate in candidates.iter().map(AsRef::as_ref) {
        if !comparator.is_valid(candidate) {
            trace!(candidate, "candidate rejected");
            continue;
        }
        best = match best {
            Some(current) if comparator.compare(candidate, current) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(candidate),
        };
    }

    debug!(
        candidates = candidates.len(),
        selected = best.unwrap_or("<none>"),
        "selected best candidate"
    );
    best
}

/// Return the best candidate only if it is newer than `current`.
///
/// ```
/// use uplift_semver::{find_upgrade, parse};
///
/// let release = parse("latest.release", None).unwrap();
/// assert_eq!(find_upgrade(&release, "1.0.0", &["0.9.0", "1.1.0"]), Some("1.1.0"));
/// assert_eq!(find_upgrade(&release, "1.1.0", &["0.9.0", "1.1.0"]), None);
/// ```
pub fn find_upgrade<'a, C, S>(comparator: &C, current: &str, candidates: &'a [S]) -> Option<&'a str>
where
    C: VersionComparator + ?Sized,
    S: AsRef<str>,
{
    let best = select_best(comparator, candidates)?;
    if comparator.compare(best, current) == Ordering::Greater {
        Some(best)
    } else {
        debug!(current, best, "no candidate newer than current version");
        None
    }
}
