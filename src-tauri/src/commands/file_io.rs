//! File I/O Commands
//!
//! Loads CSV content into session state, either from a file-system path
//! (native dialog flow) or from uploaded bytes (the page's upload control).
//! Responsible for:
//! - Parsing CSV into a Polars DataFrame via the analysis library
//! - Extracting metadata (column names, types, null counts)
//! - Storing loaded data in application state
//! - Emitting events to notify the frontend of state changes
//!
//! # Error Handling
//!
//! Commands return `AnalysisError`, which serializes as `{code, message}`
//! so the page can display inline errors and keep running.
//!
//! # Events Emitted
//!
//! - `app:loading` - when loading starts/ends
//! - `file:loaded` - when a dataset is successfully loaded
//! - `app:error` - when an error occurs

use lens_analysis::{loader, AnalysisError, ColumnKind, MissingStrategy};
use polars::prelude::DataFrame;
use std::path::Path;
use tauri::{AppHandle, State};

use crate::events::AppEventEmitter;
use crate::state::{AppState, ColumnInfo, FileInfo, LoadedDataFrame};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Extract column metadata from a DataFrame.
///
/// One `ColumnInfo` per column, in column order, carrying the
/// classification tag the missing-values panel branches on.
pub(crate) fn extract_column_info(df: &DataFrame) -> Vec<ColumnInfo> {
    df.get_columns()
        .iter()
        .map(|col| ColumnInfo {
            name: col.name().to_string(),
            dtype: format!("{:?}", col.dtype()),
            kind: ColumnKind::of(col.dtype()),
            null_count: col.null_count(),
        })
        .collect()
}

/// Build `FileInfo` for a freshly parsed frame.
pub(crate) fn build_file_info(
    path: Option<String>,
    name: String,
    size_bytes: u64,
    df: &DataFrame,
) -> FileInfo {
    FileInfo {
        path,
        name,
        size_bytes,
        row_count: df.height(),
        column_count: df.width(),
        columns: extract_column_info(df),
    }
}

/// Store a parsed frame in session state and notify the page.
///
/// Resets the strategy selection and the last resolution summary: a new
/// dataset starts a fresh session.
fn store_dataset(app: &AppHandle, state: &State<'_, AppState>, df: DataFrame, file_info: FileInfo) {
    {
        let mut df_guard = state.dataframe.write();
        *df_guard = Some(LoadedDataFrame {
            df,
            file_info: file_info.clone(),
        });
    }
    *state.selected_strategy.write() = MissingStrategy::default();
    *state.last_resolution.write() = None;

    app.emit_file_loaded(file_info);
    app.emit_loading(false, None);
}

// ============================================================================
// TAURI COMMANDS
// ============================================================================

/// Loads a CSV file from a file-system path into session state.
///
/// # Returns
///
/// - `Ok(FileInfo)` - file successfully loaded, returns metadata
/// - `Err(AnalysisError)` - `NOT_FOUND` for a missing path,
///   `UNSUPPORTED_FORMAT` for a non-CSV file, or a parse failure
///
/// # Events Emitted
///
/// - `app:loading { is_loading: true, message: "Parsing CSV..." }` on start
/// - `file:loaded { file_info }` on success
/// - `app:error { code, message }` on error (before returning `Err`)
#[tauri::command]
pub async fn load_file(
    app: AppHandle,
    path: String,
    state: State<'_, AppState>,
) -> Result<FileInfo, AnalysisError> {
    app.emit_loading(true, Some("Parsing CSV..."));

    let df = loader::load_dataset(&path).inspect_err(|e| {
        app.emit_error(e.error_code(), &e.to_string());
        app.emit_loading(false, None);
    })?;

    // File size is display-only; a metadata failure is not fatal.
    let size_bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    let file_name = Path::new(&path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let file_info = build_file_info(Some(path.clone()), file_name, size_bytes, &df);
    store_dataset(&app, &state, df, file_info.clone());

    Ok(file_info)
}

/// Loads an uploaded `.csv` payload into session state.
///
/// The page reads the picked file into bytes and passes them here along
/// with the original file name, which is used for the format gate.
#[tauri::command]
pub async fn upload_file(
    app: AppHandle,
    file_name: String,
    contents: Vec<u8>,
    state: State<'_, AppState>,
) -> Result<FileInfo, AnalysisError> {
    app.emit_loading(true, Some("Parsing upload..."));

    let df = loader::load_dataset_from_bytes(&file_name, &contents).inspect_err(|e| {
        app.emit_error(e.error_code(), &e.to_string());
        app.emit_loading(false, None);
    })?;

    let file_info = build_file_info(None, file_name, contents.len() as u64, &df);
    store_dataset(&app, &state, df, file_info.clone());

    Ok(file_info)
}

/// Returns metadata for the currently loaded dataset, if any.
///
/// Lets the page refresh its header state without re-loading. Synchronous
/// because it only reads from memory.
#[tauri::command]
pub fn get_file_info(state: State<'_, AppState>) -> Option<FileInfo> {
    let guard = state.dataframe.read();
    guard.as_ref().map(|loaded| loaded.file_info.clone())
}
