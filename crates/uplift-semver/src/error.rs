//! Error types for constraint parsing and configuration.
//!
//! Each error carries a stable code (e.g. `E0102`) so callers can match on
//! the failure class without parsing the message.

use crate::range::RangeKind;
use std::fmt;
use thiserror::Error;

/// Error codes for Uplift semver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No constraint grammar recognized the text
    E0101,
    /// Constraint syntax recognized but content is invalid
    E0102,
    /// Metadata pattern is not a valid regular expression
    E0103,
    /// Invalid upgrade configuration
    E0104,
    /// Invalid JSON syntax in configuration
    E0105,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
        }
    }

    /// Get a brief title for this error code.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::E0101 => "Unrecognized constraint",
            Self::E0102 => "Malformed constraint",
            Self::E0103 => "Invalid metadata pattern",
            Self::E0104 => "Invalid configuration",
            Self::E0105 => "JSON syntax error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for constraint handling.
#[derive(Error, Debug)]
pub enum Error {
    /// No range variant claimed the constraint text.
    #[error("[E0101] no constraint grammar matches '{constraint}'")]
    UnrecognizedSyntax {
        /// The constraint text.
        constraint: String,
    },

    /// A range variant claimed the text but could not parse it.
    #[error("[E0102] malformed {kind} constraint '{constraint}': {reason}")]
    MalformedConstraint {
        /// Variant that recognized the syntax.
        kind: RangeKind,
        /// The constraint text.
        constraint: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The metadata pattern failed to compile.
    #[error("[E0103] invalid metadata pattern '{pattern}': {reason}")]
    InvalidMetadataPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Regex compiler message.
        reason: String,
    },

    /// Configuration error.
    #[error("[E0104] config error: {message}")]
    Config {
        /// Error message.
        message: String,
        /// Configuration key.
        key: Option<String>,
    },

    /// JSON error.
    #[error("[E0105] json error: {0}")]
    Json(#[from] sonic_rs::Error),
}

impl Error {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedSyntax { .. } => ErrorCode::E0101,
            Self::MalformedConstraint { .. } => ErrorCode::E0102,
            Self::InvalidMetadataPattern { .. } => ErrorCode::E0103,
            Self::Config { .. } => ErrorCode::E0104,
            Self::Json(_) => ErrorCode::E0105,
        }
    }

    /// A one-line hint for fixing the error, if there is one.
    #[must_use]
    pub const fn help(&self) -> Option<&'static str> {
        match self {
            Self::UnrecognizedSyntax { .. } => Some(
                "use an exact version, ^x.y.z, ~x.y.z, a - b, x.y.*, [a,b), latest.release or latest.patch",
            ),
            Self::MalformedConstraint { .. } => {
                Some("version segments must be non-negative integers")
            }
            Self::InvalidMetadataPattern { .. } => {
                Some("the pattern is matched as a regular expression against the whole suffix, e.g. -jre")
            }
            Self::Config { .. } | Self::Json(_) => None,
        }
    }

    /// Whether the caller may recover by trying another interpretation.
    ///
    /// Only unrecognized syntax qualifies; a malformed constraint was claimed
    /// by a grammar and is final.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnrecognizedSyntax { .. })
    }

    /// Create a malformed-constraint error.
    #[must_use]
    pub fn malformed(kind: RangeKind, constraint: &str, reason: impl Into<String>) -> Self {
        Self::MalformedConstraint {
            kind,
            constraint: constraint.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error tied to a key.
    #[must_use]
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
