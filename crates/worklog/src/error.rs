//! Error types for the worklog crate.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop a run before (or outside of) per-group processing.
#[derive(Debug, Error)]
pub enum WorklogError {
    #[error("No JSON export files found in '{}'", dir.display())]
    NoExports { dir: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse export '{}': {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Failed to write report '{}': {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Run cancelled")]
    Cancelled,
}

/// Errors returned by the remote work-log tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Request never produced a response (connect error, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Tracker answered with a status other than the expected one
    #[error("Tracker returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

/// Result type alias for worklog operations
pub type Result<T> = std::result::Result<T, WorklogError>;
