//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Package errors
//! - 3xx: Config errors
//! - 6xx: Serialization errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `NotADirectory` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Package errors (1xx)
    // ========================================
    /// E101: The package path is missing or not a directory
    NotADirectory,
    /// E103: The primary document could not be read as text
    DocumentUnreadable,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Serialization errors (6xx)
    // ========================================
    /// E605: JSON encoding failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `NotADirectory` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::NotADirectory => 101,
            Self::DocumentUnreadable => 103,
            Self::ConfigInvalid => 302,
            Self::SerializationError => 605,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::NotADirectory => "Pass the path of a skill directory (the folder containing SKILL.md)",
            Self::DocumentUnreadable => "Ensure SKILL.md is a UTF-8 text file",
            Self::ConfigInvalid => "Fix the config file or SKILLCHECK_* environment variable named in the message",
            Self::SerializationError => "This is likely a bug; re-run with -vv and report the output",
            Self::IoError => "Check file permissions and that the path still exists",
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "package",
            3 => "config",
            6 => "serialization",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::NotADirectory,
            Self::DocumentUnreadable,
            Self::ConfigInvalid,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
