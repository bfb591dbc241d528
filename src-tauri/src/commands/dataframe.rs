//! DataFrame Operations Commands
//!
//! Row fetching for the virtual-scrolled preview grid, and closing the
//! dataset. Instead of sending every row to the page, `get_rows` returns
//! only the slice currently visible in the viewport (plus buffer rows the
//! page requests around it).
//!
//! # Events Emitted
//!
//! - `file:closed` - when the dataset is closed

use polars::prelude::AnyValue;
use serde::Serialize;
use serde_json::{Number, Value};
use tauri::{AppHandle, State};

use crate::events::AppEventEmitter;
use crate::state::AppState;

// ============================================================================
// TYPES
// ============================================================================

/// A single row of cell values.
///
/// Each cell is a `serde_json::Value`: null, boolean, number, or string.
pub type Row = Vec<serde_json::Value>;

/// Response containing rows for virtual scrolling.
///
/// * `rows` - 2D array of cell values: rows[rowIndex][colIndex]
/// * `start` - the starting row index (0-indexed) of this batch
/// * `total_rows` - total rows in the dataset (for scrollbar calculation)
#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub rows: Vec<Row>,
    pub start: usize,
    pub total_rows: usize,
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Converts a Polars `AnyValue` to a `serde_json::Value`.
///
/// NaN and infinite floats become `null` (JSON doesn't support them);
/// complex types (Date, List, ...) are stringified with their Display form.
fn any_value_to_json(value: AnyValue) -> serde_json::Value {
    match value {
        AnyValue::Null => Value::Null,

        AnyValue::Boolean(b) => Value::Bool(b),

        AnyValue::Int8(i) => Value::Number(i.into()),
        AnyValue::Int16(i) => Value::Number(i.into()),
        AnyValue::Int32(i) => Value::Number(i.into()),
        AnyValue::Int64(i) => Value::Number(i.into()),

        AnyValue::UInt8(u) => Value::Number(u.into()),
        AnyValue::UInt16(u) => Value::Number(u.into()),
        AnyValue::UInt32(u) => Value::Number(u.into()),
        AnyValue::UInt64(u) => Value::Number(u.into()),

        AnyValue::Float32(f) => Number::from_f64(f as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),

        AnyValue::Float64(f) => Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),

        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),

        _ => Value::String(format!("{}", value)),
    }
}

// ============================================================================
// TAURI COMMANDS
// ============================================================================

/// Fetches rows from the loaded dataset for virtual scrolling.
///
/// Bounds are handled gracefully: `start` beyond the end is clamped,
/// `count` past the end returns only the available rows, and an empty
/// dataset returns an empty batch. Returns `None` if nothing is loaded.
///
/// Uses Polars `slice()` for O(1) row access; only the requested rows are
/// converted to JSON.
#[tauri::command]
pub fn get_rows(start: usize, count: usize, state: State<'_, AppState>) -> Option<RowsResponse> {
    let guard = state.dataframe.read();
    let loaded = guard.as_ref()?; // Returns None if no dataset is loaded

    let df = &loaded.df;
    let total_rows = df.height();

    // Clamp start to a valid range; saturating_sub prevents underflow
    // when total_rows is 0.
    let start = start.min(total_rows.saturating_sub(1));
    let available = total_rows.saturating_sub(start);
    let actual_count = count.min(available);

    if actual_count == 0 {
        return Some(RowsResponse {
            rows: vec![],
            start,
            total_rows,
        });
    }

    let sliced = df.slice(start as i64, actual_count);

    let mut rows = Vec::with_capacity(actual_count);
    for row_idx in 0..sliced.height() {
        let mut row = Vec::with_capacity(sliced.width());
        for col in sliced.get_columns() {
            let value = col.get(row_idx).ok().map_or(Value::Null, any_value_to_json);
            row.push(value);
        }
        rows.push(row);
    }

    Some(RowsResponse {
        rows,
        start,
        total_rows,
    })
}

/// Closes the currently loaded dataset and frees memory.
///
/// Dropping the `LoadedDataFrame` releases the Polars memory; the strategy
/// selection and last resolution summary are cleared with it.
#[tauri::command]
pub fn close_file(app: AppHandle, state: State<'_, AppState>) {
    {
        let mut df_guard = state.dataframe.write();
        *df_guard = None; // Previous value is dropped here
    }
    *state.last_resolution.write() = None;

    app.emit_file_closed();
}
