//! Upgrade options as supplied by a recipe.
//!
//! ```json
//! {
//!   "newVersion": "latest.release",
//!   "versionPattern": "-jre",
//!   "currentVersion": "28.2-jre"
//! }
//! ```

use crate::error::{Error, Result};
use crate::metadata::MetadataPattern;
use crate::range::{Constraint, RangeContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options describing one dependency upgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeConfig {
    /// Constraint text the new version must satisfy.
    pub new_version: String,
    /// Required metadata suffix pattern, e.g. `-jre`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_pattern: Option<String>,
    /// Version currently declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
}

impl UpgradeConfig {
    /// Create a config for a constraint.
    #[must_use]
    pub fn new(new_version: impl Into<String>) -> Self {
        Self {
            new_version: new_version.into(),
            ..Self::default()
        }
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = sonic_rs::from_str(json)?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(sonic_rs::to_string_pretty(self)?)
    }

    /// Set the metadata pattern.
    #[must_use]
    pub fn with_version_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.version_pattern = Some(pattern.into());
        self
    }

    /// Set the current version.
    #[must_use]
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = Some(version.into());
        self
    }

    /// Check the options without building a constraint.
    pub fn validate(&self) -> Result<()> {
        if self.new_version.trim().is_empty() {
            return Err(Error::config("newVersion", "must not be empty"));
        }
        if let Some(pattern) = &self.version_pattern {
            MetadataPattern::new(pattern)?;
        }
        if let Some(current) = &self.current_version
            && current.trim().is_empty()
        {
            return Err(Error::config("currentVersion", "must not be empty when set"));
        }
        Ok(())
    }

    /// Validate, then parse `newVersion` into a constraint.
    pub fn constraint(&self) -> Result<Constraint> {
        self.validate()?;
        let context = RangeContext {
            current_version: self.current_version.as_deref(),
            metadata_pattern: self.version_pattern.as_deref(),
        };
        let constraint = Constraint::parse(&self.new_version, &context)?;
        debug!(
            new_version = %self.new_version,
            kind = %constraint.kind(),
            "built constraint from config"
        );
        Ok(constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_json() {
        let config = UpgradeConfig::from_json(
            r#"{"newVersion": "latest.patch", "versionPattern": "-jre", "currentVersion": "28.1-jre"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            UpgradeConfig::new("latest.patch")
                .with_version_pattern("-jre")
                .with_current_version("28.1-jre")
        );

        let constraint = config.constraint().unwrap();
        assert_eq!(constraint.kind(), RangeKind::LatestPatch);
        assert!(constraint.is_valid("28.1.3-jre"));
        assert!(!constraint.is_valid("28.1.3"));
        assert!(!constraint.is_valid("28.2-jre"));
    }

    #[test]
    fn optional_fields_default() {
        let config = UpgradeConfig::from_json(r#"{"newVersion": "^1.0"}"#).unwrap();
        assert_eq!(config.version_pattern, None);
        assert_eq!(config.current_version, None);
        assert_eq!(config.constraint().unwrap().kind(), RangeKind::Caret);
    }

    #[test]
    fn empty_new_version_is_config_error() {
        let err = UpgradeConfig::from_json("{}").unwrap().validate().unwrap_err();
        assert!(matches!(err, Error::Config { key: Some(ref key), .. } if key == "newVersion"));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let err = UpgradeConfig::new("latest.release")
            .with_version_pattern("[")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMetadataPattern { .. }));
    }

    #[test]
    fn invalid_json() {
        let err = UpgradeConfig::from_json("{newVersion").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn json_round_trip_skips_absent_fields() {
        let json = UpgradeConfig::new("1.x").to_json().unwrap();
        assert!(json.contains("\"newVersion\""));
        assert!(!json.contains("versionPattern"));
    }
}
