//! Error types and exit codes for notegen
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed URL)
//! - 3: Data error (missing captions, missing transcript)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the notegen CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing captions, missing files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ureq::Error> for NotegenError {
    fn from(err: ureq::Error) -> Self {
        NotegenError::Http(err.to_string())
    }
}

/// Errors that can occur during notegen operations
#[derive(Error, Debug)]
pub enum NotegenError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid video URL: {url} ({reason})")]
    InvalidUrl { url: String, reason: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("transcript not found: {path:?}")]
    TranscriptNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NotegenError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NotegenError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NotegenError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid video URL
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        NotegenError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotegenError::UnknownFormat(_)
            | NotegenError::UsageError(_)
            | NotegenError::InvalidUrl { .. } => ExitCode::Usage,

            NotegenError::NotFound { .. } | NotegenError::TranscriptNotFound { .. } => {
                ExitCode::Data
            }

            NotegenError::Io(_)
            | NotegenError::Json(_)
            | NotegenError::Http(_)
            | NotegenError::FailedOperationWithTarget { .. }
            | NotegenError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NotegenError::UnknownFormat(_) => "unknown_format",
            NotegenError::UsageError(_) => "usage_error",
            NotegenError::InvalidUrl { .. } => "invalid_url",
            NotegenError::NotFound { .. } => "not_found",
            NotegenError::TranscriptNotFound { .. } => "transcript_not_found",
            NotegenError::Io(_) => "io_error",
            NotegenError::Json(_) => "json_error",
            NotegenError::Http(_) => "http_error",
            NotegenError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NotegenError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for notegen operations
pub type Result<T> = std::result::Result<T, NotegenError>;
