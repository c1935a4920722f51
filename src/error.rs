//! Error types for the submission-packager application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Submission naming errors
    #[error("Malformed submission filename '{filename}': expected at least {expected} '-'-separated segments, found {found}")]
    MalformedFilename {
        filename: String,
        expected: usize,
        found: usize,
    },

    #[error("Sequence numbers exhausted: cannot assign {needed} more after {start}")]
    SequenceExhausted { start: u64, needed: usize },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Grade table errors
    #[error("Invalid grade table {path}: {message}")]
    GradeTable { path: String, message: String },

    // Packaging errors
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("{0} assignment(s) failed to package")]
    AssignmentsFailed(u64),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const PACKAGE_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_ASSIGNMENTS_FAILED: i32 = 6;
}
