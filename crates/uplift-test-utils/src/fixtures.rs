//! Pre-built version lists for common testing scenarios.
//!
//! The lists mirror what artifact repositories publish for a few well known
//! libraries: mixed precision, vendor suffixes, release tokens and
//! pre-releases, in publication order rather than sorted.

/// Collection of pre-built test fixtures.
#[derive(Debug)]
pub struct Fixtures;

impl Fixtures {
    /// Guava: every release carries a `-jre` or `-android` flavor.
    #[must_use]
    pub fn guava_versions() -> Vec<&'static str> {
        vec![
            "25.0-jre",
            "25.0-android",
            "25.1-jre",
            "25.1-android",
            "27.0-jre",
            "27.0.1-jre",
            "27.0.1-android",
            "28.0-jre",
            "28.1-jre",
            "28.2-jre",
            "28.2-android",
            "29.0-jre",
            "29.0-android",
            "30.0-jre",
            "30.0-android",
            "30.1-jre",
            "31.0-rc1",
        ]
    }

    /// Spring style: `.RELEASE` tokens, milestones and snapshots.
    #[must_use]
    pub fn spring_versions() -> Vec<&'static str> {
        vec![
            "5.1.9.RELEASE",
            "5.2.0.M1",
            "5.2.0.RELEASE",
            "5.2.1.RELEASE",
            "5.2.2.RELEASE",
            "5.3.0-M2",
            "5.3.0-SNAPSHOT",
            "5.3.0",
            "5.3.1",
        ]
    }

    /// Hibernate style: `.Final` tokens of varying case.
    #[must_use]
    pub fn hibernate_versions() -> Vec<&'static str> {
        vec![
            "5.4.1.Final",
            "5.4.2.Final",
            "5.4.10.FINAL",
            "5.4.9.Final",
            "6.0.0.Alpha1",
            "6.0.0.CR1",
        ]
    }

    /// Plain three-segment versions spanning several major lines.
    #[must_use]
    pub fn semver_versions() -> Vec<&'static str> {
        vec![
            "0.0.1", "0.0.3", "0.0.4", "0.1.0", "0.2.3", "0.2.9", "0.3.0", "1.0.0", "1.2.3",
            "1.2.4", "1.9.0", "1.10.2", "2.0.0", "2.3.4", "2.3.5",
        ]
    }

    /// Versions of mixed precision that tie once normalized.
    #[must_use]
    pub fn mixed_precision_versions() -> Vec<&'static str> {
        vec!["1", "1.0", "1.0.0", "1.0.0.RELEASE", "1.1", "1.1.1", "1.1.1.1"]
    }
}
