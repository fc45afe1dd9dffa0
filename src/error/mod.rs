//! Error handling for skillcheck.
//!
//! This module provides:
//! - [`SkillcheckError`]: The main error enum for input-level failures
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error for JSON output
//!
//! Problems found *inside* a package are never errors; they are reported as
//! check records. Only conditions that stop the run end up here.

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for skillcheck operations.
#[derive(Error, Debug)]
pub enum SkillcheckError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot read {}: {reason}", .path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SkillcheckError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::NotADirectory(_) => ErrorCode::NotADirectory,
            Self::DocumentUnreadable { .. } => ErrorCode::DocumentUnreadable,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from(self)
    }
}

/// A structured error with machine-readable code and suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "NOT_A_DIRECTORY")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Error category (e.g., "package", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&SkillcheckError> for StructuredError {
    fn from(err: &SkillcheckError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<SkillcheckError> for StructuredError {
    fn from(err: SkillcheckError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias using `SkillcheckError`.
pub type Result<T> = std::result::Result<T, SkillcheckError>;
