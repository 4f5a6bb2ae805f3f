//! Testing utilities for Uplift.
//!
//! # Modules
//!
//! - [`fixtures`]: Real-world version lists and constraint tables
//! - [`proptest_strategies`]: Proptest strategies for versions and constraints
//!
//! # Example
//!
//! ```rust,no_run
//! use uplift_test_utils::prelude::*;
//!
//! init_tracing();
//! let versions = Fixtures::guava_versions();
//! assert!(versions.contains(&"29.0-jre"));
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod fixtures;
pub mod proptest_strategies;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `warn`. Output goes through the test
/// writer so it is captured per test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .from_env_lossy();

        // Another harness may have installed a global subscriber already.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_test_writer()
            .try_init();
    });
}

/// Re-export commonly used testing utilities.
pub mod prelude {
    pub use crate::fixtures::Fixtures;
    pub use crate::init_tracing;
    pub use crate::proptest_strategies::*;

    // Re-export common testing crates
    pub use pretty_assertions::{assert_eq, assert_ne};
    pub use proptest::prelude::*;
}
