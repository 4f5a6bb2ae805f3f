//! Version constraint engine for automated dependency upgrades.
//!
//! Given a constraint written in one of several syntaxes and a list of
//! candidate version strings, this crate decides which candidates satisfy
//! the constraint and picks the highest one:
//! - Version normalization (`1.5.1.RELEASE` -> `1.5.1`, `29-jre` -> `29.0.0-jre`)
//! - Variable-precision ordering (`1.1 < 1.1.0 < 1.1.1`)
//! - Constraint syntaxes: exact, `latest.release`, `latest.patch`, caret,
//!   tilde, hyphen, x-range, bracketed sets and `*`
//! - Metadata suffix patterns (`-jre`)
//! - Candidate selection
//!
//! ```
//! use uplift_semver::{RangeContext, Constraint, select_best};
//!
//! let context = RangeContext::new().with_metadata_pattern("-jre");
//! let release = Constraint::parse("latest.release", &context).unwrap();
//! let best = select_best(&release, &["28.2-jre", "29.0-jre", "30.0-android", "30.0"]);
//! assert_eq!(best, Some("29.0-jre"));
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod comparator;
mod config;
pub mod error;
mod metadata;
pub mod range;
mod select;
mod version;

pub use comparator::{compare, compare_segments, is_valid_format};
pub use config::UpgradeConfig;
pub use error::{Error, ErrorCode, Result};
pub use metadata::{MetadataPattern, accepts_metadata, is_pre_release};
pub use range::{Constraint, Range, RangeContext, RangeKind, parse};
pub use select::{ConstraintSet, NaturalOrder, VersionComparator, find_upgrade, select_best};
pub use version::{
    CANONICAL_SEGMENTS, Version, is_release_suffix, normalize, pad_segments, strip_release_suffix,
};
