//! Error types for taskopia
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown task, missing dataset)
//! - 4: Operation failed (I/O, malformed dataset)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskopia CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskopia operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Ambiguous task id '{input}': matches {}", .matches.join(", "))]
    AmbiguousTaskId { input: String, matches: Vec<String> },

    #[error("Dataset not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("Dataset already exists: {0}")]
    DatasetExists(PathBuf),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Unsupported dataset schema '{0}'")]
    UnsupportedSchema(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_)
            | Error::InvalidConfig(_)
            | Error::TaskNotFound(_)
            | Error::AmbiguousTaskId { .. }
            | Error::DatasetNotFound(_)
            | Error::DatasetExists(_) => exit_codes::USER_ERROR,

            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::UnsupportedSchema(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskopia operations
pub type Result<T> = std::result::Result<T, Error>;
