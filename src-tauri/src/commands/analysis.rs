//! Analysis commands for computing dataset insights.
//!
//! This module orchestrates profiling and chart-data derivation. Heavy
//! computation runs in a background thread to keep the UI responsive; the
//! page receives plain chart data and does the actual drawing.

use chrono::Local;
use lens_analysis::{charts, AnalysisReport};
use serde::Serialize;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use crate::events::AppEventEmitter;
use crate::state::AppState;

// ==========================================================================
// TYPES
// ==========================================================================

/// Result of exporting an analysis report.
#[derive(Debug, Serialize)]
pub struct AnalysisExportResult {
    pub report_path: String,
}

// ==========================================================================
// TAURI COMMANDS
// ==========================================================================

/// Runs the full analysis over the loaded dataset.
///
/// Profiles every column and derives the chart artifacts (histograms,
/// correlation heatmap, count plots). Runs on a blocking task so a wide
/// dataset doesn't freeze the webview.
#[tauri::command]
pub async fn run_analysis(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<AnalysisReport, String> {
    let df = {
        let guard = state.dataframe.read();
        guard
            .as_ref()
            .map(|loaded| loaded.df.clone())
            .ok_or_else(|| "No data loaded".to_string())?
    };

    app.emit_loading(true, Some("Running analysis..."));

    let analysis = match tauri::async_runtime::spawn_blocking(move || {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| charts::analyze(&df)))
    })
    .await
    {
        Ok(Ok(Ok(result))) => result,
        Ok(Ok(Err(err))) => {
            app.emit_loading(false, None);
            app.emit_error(err.error_code(), &err.to_string());
            return Err(err.to_string());
        }
        Ok(Err(_panic)) => {
            app.emit_loading(false, None);
            return Err("Analysis task panicked".to_string());
        }
        Err(err) => {
            app.emit_loading(false, None);
            return Err(format!("Analysis task failed: {err}"));
        }
    };

    app.emit_loading(false, None);
    Ok(analysis)
}

/// Exports the current analysis to a JSON file chosen in a save dialog.
#[tauri::command]
pub async fn export_analysis_report(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<AnalysisExportResult, String> {
    let analysis = run_analysis(app.clone(), state).await?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let default_filename = format!("analysis_{timestamp}.json");

    let file_path = app
        .dialog()
        .file()
        .add_filter("JSON Files", &["json"])
        .set_file_name(&default_filename)
        .blocking_save_file();

    let report_path = match file_path {
        Some(path) => path.to_string(),
        None => return Err("Export cancelled by user".to_string()),
    };

    let report_json = serde_json::to_string_pretty(&analysis)
        .map_err(|e| format!("Failed to serialize analysis: {e}"))?;

    std::fs::write(&report_path, report_json)
        .map_err(|e| format!("Failed to write report: {e}"))?;

    Ok(AnalysisExportResult { report_path })
}
