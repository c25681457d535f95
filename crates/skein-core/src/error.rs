//! Error types and exit codes for skein
//!
//! Graph operations never fail: removing a missing edge, adding a
//! duplicate vertex, or querying an absent label all produce ordinary
//! results (a `false` changed flag, an empty sequence). Errors cover
//! CLI usage and input parsing only.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed edge specs)

use thiserror::Error;

/// Exit codes for the skein binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during skein operations
#[derive(Error, Debug)]
pub enum SkeinError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid edge '{spec}': {reason}")]
    InvalidEdgeSpec { spec: String, reason: String },

    #[error("invalid script command '{command}': {reason}")]
    InvalidScriptCommand { command: String, reason: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SkeinError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkeinError::UnknownFormat(_)
            | SkeinError::InvalidEdgeSpec { .. }
            | SkeinError::InvalidScriptCommand { .. }
            | SkeinError::UsageError(_) => ExitCode::Usage,

            SkeinError::Json(_) | SkeinError::Other(_) => ExitCode::Failure,
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SkeinError::UnknownFormat(_) => "unknown_format",
            SkeinError::InvalidEdgeSpec { .. } => "invalid_edge_spec",
            SkeinError::InvalidScriptCommand { .. } => "invalid_script_command",
            SkeinError::UsageError(_) => "usage_error",
            SkeinError::Json(_) => "json_error",
            SkeinError::Other(_) => "other",
        }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;
