//! Event System for Rust → Frontend Communication
//!
//! Events let Rust push state changes to the page; commands let the page
//! pull data when it needs it (e.g., `get_rows` for large payloads). The
//! page subscribes to events to know *when* to fetch, then uses commands
//! to fetch the actual data.
//!
//! # Events
//!
//! - `file:loaded` - dataset successfully loaded (contains `FileInfo`)
//! - `file:closed` - dataset closed
//! - `app:loading` - loading state changed
//! - `app:error` - error occurred
//! - `dataset:resolved` - missing-value strategy applied (contains summary)

use lens_analysis::ResolveSummary;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::state::FileInfo;

// ============================================================================
// EVENT NAME CONSTANTS
// ============================================================================

/// Event emitted when a dataset is successfully loaded.
/// Payload: `FileLoadedPayload` containing `FileInfo`
pub const EVENT_FILE_LOADED: &str = "file:loaded";

/// Event emitted when the dataset is closed.
/// Payload: Empty (unit type serializes to `null`)
pub const EVENT_FILE_CLOSED: &str = "file:closed";

/// Event emitted when loading state changes.
/// Payload: `LoadingPayload` with status and optional message
pub const EVENT_LOADING: &str = "app:loading";

/// Event emitted when an error occurs.
/// Payload: `ErrorPayload` with error code and message
pub const EVENT_ERROR: &str = "app:error";

/// Event emitted after a missing-value strategy has been applied.
/// Payload: `ResolveSummary` describing the mutation
pub const EVENT_DATASET_RESOLVED: &str = "dataset:resolved";

// ============================================================================
// EVENT PAYLOADS
// ============================================================================

/// Payload for the `file:loaded` event.
#[derive(Debug, Clone, Serialize)]
pub struct FileLoadedPayload {
    /// Complete file metadata (name, columns, row count, etc.)
    pub file_info: FileInfo,
}

/// Payload for the `app:loading` event.
#[derive(Debug, Clone, Serialize)]
pub struct LoadingPayload {
    /// Whether loading is currently in progress
    pub is_loading: bool,
    /// Optional message describing what's happening (e.g., "Parsing CSV...")
    pub message: Option<String>,
}

/// Payload for the `app:error` event.
///
/// The page shows this inline and keeps running; a failed operation never
/// terminates the session.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    /// Error code for programmatic handling (e.g., "UNSUPPORTED_FORMAT")
    pub code: String,
    /// Human-readable error message for display
    pub message: String,
}

// ============================================================================
// EVENT EMISSION HELPERS
// ============================================================================

/// Helper trait for emitting events with a cleaner API.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::events::AppEventEmitter;
///
/// fn some_command(app: AppHandle) {
///     app.emit_loading(true, Some("Parsing CSV..."));
///     app.emit_error("UNSUPPORTED_FORMAT", "Not a CSV file");
/// }
/// ```
pub trait AppEventEmitter {
    /// Emit the `file:loaded` event with file metadata.
    fn emit_file_loaded(&self, file_info: FileInfo);

    /// Emit the `file:closed` event.
    fn emit_file_closed(&self);

    /// Emit the `app:loading` event with loading state.
    fn emit_loading(&self, is_loading: bool, message: Option<&str>);

    /// Emit the `app:error` event with error details.
    fn emit_error(&self, code: &str, message: &str);

    /// Emit the `dataset:resolved` event with the resolution summary.
    fn emit_dataset_resolved(&self, summary: &ResolveSummary);
}

impl AppEventEmitter for AppHandle {
    fn emit_file_loaded(&self, file_info: FileInfo) {
        let payload = FileLoadedPayload { file_info };
        if let Err(e) = self.emit(EVENT_FILE_LOADED, payload) {
            log::warn!("Failed to emit file:loaded event: {}", e);
        }
    }

    fn emit_file_closed(&self) {
        // Emit with unit type () which serializes to null
        if let Err(e) = self.emit(EVENT_FILE_CLOSED, ()) {
            log::warn!("Failed to emit file:closed event: {}", e);
        }
    }

    fn emit_loading(&self, is_loading: bool, message: Option<&str>) {
        let payload = LoadingPayload {
            is_loading,
            message: message.map(String::from),
        };
        if let Err(e) = self.emit(EVENT_LOADING, payload) {
            log::warn!("Failed to emit app:loading event: {}", e);
        }
    }

    fn emit_error(&self, code: &str, message: &str) {
        let payload = ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.emit(EVENT_ERROR, payload) {
            log::warn!("Failed to emit app:error event: {}", e);
        }
    }

    fn emit_dataset_resolved(&self, summary: &ResolveSummary) {
        if let Err(e) = self.emit(EVENT_DATASET_RESOLVED, summary) {
            log::warn!("Failed to emit dataset:resolved event: {}", e);
        }
    }
}
