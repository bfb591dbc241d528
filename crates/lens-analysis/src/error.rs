//! Custom error types for the analysis library.
//!
//! Errors are serializable for Tauri IPC compatibility, allowing them to be
//! sent to the frontend for display.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for loading and analysis operations.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input path does not exist.
    #[error("The file at {0} does not exist")]
    NotFound(String),

    /// Input is not CSV-formatted.
    #[error("Unsupported file format: {0}. Please provide a CSV file")]
    UnsupportedFormat(String),

    /// No dataset loaded in the session.
    #[error("No data loaded")]
    NoDataLoaded,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Get error code for frontend handling.
    ///
    /// These codes can be used by the frontend to handle specific error types
    /// differently (e.g., keeping the current dataset visible after a failed
    /// upload vs. clearing the page on a missing file).
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::NoDataLoaded => "NO_DATA_LOADED",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Check if this error is recoverable within a running session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::UnsupportedFormat(_) | Self::NoDataLoaded
        )
    }
}

/// Serialize implementation for Tauri IPC compatibility.
///
/// Errors are serialized as a struct with `code` and `message` fields,
/// making them easy to handle in the frontend.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
