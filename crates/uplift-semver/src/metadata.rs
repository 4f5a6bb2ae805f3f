//! Metadata suffix matching.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Pre-release markers at the end of a metadata suffix.
static PRE_RELEASE_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        (?:^|[-.+_])
        (?:snapshot|alpha|beta|rc|cr|m|milestone|ea|preview|dev)
        (?:[-.]?\d+)*
        $
        ",
    )
    .expect("valid regex")
});

/// A required metadata suffix, e.g. `-jre`.
///
/// The pattern is a regular expression matched against the whole suffix,
/// leading separator included.
#[derive(Debug, Clone)]
pub struct MetadataPattern {
    source: String,
    regex: Regex,
}

impl MetadataPattern {
    /// Compile a metadata pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|e| Error::InvalidMetadataPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check a metadata suffix against the pattern.
    #[must_use]
    pub fn matches(&self, metadata: &str) -> bool {
        self.regex.is_match(metadata)
    }
}

impl PartialEq for MetadataPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for MetadataPattern {}

/// Apply the metadata gate.
///
/// Without a pattern only versions with no metadata pass; with one, the
/// version must carry metadata the pattern matches.
#[must_use]
pub fn accepts_metadata(pattern: Option<&MetadataPattern>, metadata: Option<&str>) -> bool {
    match (pattern, metadata) {
        (None, None) => true,
        (Some(pattern), Some(metadata)) => pattern.matches(metadata),
        (None, Some(_)) | (Some(_), None) => false,
    }
}

/// Whether a metadata suffix marks a pre-release (`-SNAPSHOT`, `-rc1`, `-M2`, ...).
#[must_use]
pub fn is_pre_release(metadata: &str) -> bool {
    PRE_RELEASE_ENDING.is_match(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn pattern_matches_whole_suffix() {
        let jre = MetadataPattern::new("-jre").unwrap();
        assert!(jre.matches("-jre"));
        assert!(!jre.matches("-android"));
        assert!(!jre.matches("-jre-extra"));
        assert_eq!(jre.as_str(), "-jre");
    }

    #[test]
    fn pattern_supports_regex() {
        let any_jdk = MetadataPattern::new(r"-jdk\d+").unwrap();
        assert!(any_jdk.matches("-jdk8"));
        assert!(any_jdk.matches("-jdk17"));
        assert!(!any_jdk.matches("-jdk"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = MetadataPattern::new("-jre(").unwrap_err();
        assert!(matches!(err, Error::InvalidMetadataPattern { ref pattern, .. } if pattern == "-jre("));
    }

    #[test]
    fn gate_without_pattern() {
        assert!(accepts_metadata(None, None));
        assert!(!accepts_metadata(None, Some("-jre")));
    }

    #[test]
    fn gate_with_pattern() {
        let jre = MetadataPattern::new("-jre").unwrap();
        assert!(accepts_metadata(Some(&jre), Some("-jre")));
        assert!(!accepts_metadata(Some(&jre), None));
        assert!(!accepts_metadata(Some(&jre), Some("-android")));
    }

    #[test_case("-SNAPSHOT", true)]
    #[test_case("-rc1", true)]
    #[test_case("-RC.2", true)]
    #[test_case("-M3", true)]
    #[test_case("-beta-1", true)]
    #[test_case("-jre.alpha", true)]
    #[test_case("-jre", false)]
    #[test_case("-android", false)]
    #[test_case("+build.7", false)]
    fn pre_release_endings(metadata: &str, expected: bool) {
        assert_eq!(is_pre_release(metadata), expected);
    }
}
