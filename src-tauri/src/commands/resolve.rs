//! Missing-Value Resolution Commands
//!
//! The interactive half of the resolver: the page offers the six strategy
//! options, the user picks one, and `apply_missing_strategy` mutates the
//! session's dataset in place. Column metadata is rebuilt afterwards so
//! the grid and the missing-values panel reflect the new shape, and the
//! classification tags are re-derived rather than served from a cache.
//!
//! # Events Emitted
//!
//! - `dataset:resolved` - after a strategy has been applied

use lens_analysis::{resolver, AnalysisError, MissingStrategy, ResolveSummary};
use tauri::{AppHandle, State};

use crate::commands::file_io::extract_column_info;
use crate::events::AppEventEmitter;
use crate::state::AppState;

/// Returns the six strategy options, in the order the select control
/// shows them, using their literal kebab-case names.
#[tauri::command]
pub fn get_strategies() -> Vec<&'static str> {
    MissingStrategy::ALL.iter().map(|s| s.as_str()).collect()
}

/// Returns the strategy currently selected for this session.
#[tauri::command]
pub fn get_selected_strategy(state: State<'_, AppState>) -> MissingStrategy {
    *state.selected_strategy.read()
}

/// Records the strategy selection without applying it.
///
/// Lets the selection survive page navigation; the mutation only happens
/// on `apply_missing_strategy`.
#[tauri::command]
pub fn set_selected_strategy(strategy: MissingStrategy, state: State<'_, AppState>) {
    *state.selected_strategy.write() = strategy;
}

/// Applies a missing-value strategy to the loaded dataset in place.
///
/// # Returns
///
/// - `Ok(ResolveSummary)` - shape before/after and per-column actions
/// - `Err(AnalysisError)` - `NO_DATA_LOADED` when nothing is loaded, or a
///   Polars failure from the mutation itself
///
/// # State Updates
///
/// The dataset's cached `FileInfo` is rebuilt (drop strategies change the
/// shape), the selection and the summary are stored for later retrieval.
#[tauri::command]
pub fn apply_missing_strategy(
    app: AppHandle,
    strategy: MissingStrategy,
    state: State<'_, AppState>,
) -> Result<ResolveSummary, AnalysisError> {
    let mut guard = state.dataframe.write();
    let loaded = guard.as_mut().ok_or(AnalysisError::NoDataLoaded)?;

    let summary = resolver::apply_strategy(&mut loaded.df, strategy).inspect_err(|e| {
        app.emit_error(e.error_code(), &e.to_string());
    })?;

    // The mutation may have changed shape, dtypes, and null counts.
    loaded.file_info.row_count = loaded.df.height();
    loaded.file_info.column_count = loaded.df.width();
    loaded.file_info.columns = extract_column_info(&loaded.df);
    drop(guard);

    *state.selected_strategy.write() = strategy;
    *state.last_resolution.write() = Some(summary.clone());

    app.emit_dataset_resolved(&summary);

    Ok(summary)
}

/// Returns the summary of the most recent resolver pass, if any.
#[tauri::command]
pub fn get_resolve_summary(state: State<'_, AppState>) -> Option<ResolveSummary> {
    state.last_resolution.read().clone()
}
