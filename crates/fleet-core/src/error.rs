//! Error types and exit codes for fleet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (storage, IO, partial cleanup)
//! - 2: Usage error (bad flags/args, invalid setting values)
//! - 3: Data error (missing directory, lock held)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing directory, lock held (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// A single item cleanup could not remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub reason: String,
}

/// Errors that can occur during fleet operations
#[derive(Error, Debug)]
pub enum FleetError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("fleeting note directory not found: {path:?}")]
    DirectoryNotFound { path: PathBuf },

    #[error("another fleet operation holds the lock on {path:?}")]
    Locked { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    Storage {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{} item(s) could not be removed: {}", .failed.len(), summarize(.failed))]
    CleanIncomplete { failed: Vec<FailedRemoval> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

fn summarize(failed: &[FailedRemoval]) -> String {
    failed
        .iter()
        .map(|f| format!("{} ({})", f.path.display(), f.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

impl FleetError {
    /// Create an error for a failed storage operation on a path
    pub fn storage(
        operation: &str,
        target: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FleetError::Storage {
            operation: operation.to_string(),
            target: target.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FleetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FleetError::UsageError(_) | FleetError::InvalidValue { .. } => ExitCode::Usage,

            FleetError::DirectoryNotFound { .. } | FleetError::Locked { .. } => ExitCode::Data,

            FleetError::Storage { .. }
            | FleetError::CleanIncomplete { .. }
            | FleetError::Io(_)
            | FleetError::Json(_)
            | FleetError::Toml(_)
            | FleetError::TomlSer(_)
            | FleetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FleetError::UsageError(_) => "usage_error",
            FleetError::InvalidValue { .. } => "invalid_value",
            FleetError::DirectoryNotFound { .. } => "directory_not_found",
            FleetError::Locked { .. } => "locked",
            FleetError::Storage { .. } => "storage_error",
            FleetError::CleanIncomplete { .. } => "clean_incomplete",
            FleetError::Io(_) => "io_error",
            FleetError::Json(_) => "json_error",
            FleetError::Toml(_) | FleetError::TomlSer(_) => "toml_error",
            FleetError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let FleetError::CleanIncomplete { failed } = self {
            error_obj["failed"] = failed
                .iter()
                .map(|f| serde_json::json!({"path": f.path, "reason": f.reason}))
                .collect();
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;
