//! Application State Management
//!
//! This module defines the session-scoped state that holds the loaded
//! dataset. All state lives here in Rust - the frontend is purely a
//! renderer with no business logic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          AppState                            │
//! ├──────────────────────────────┬───────────────────────────────┤
//! │  dataframe: RwLock           │  selected_strategy: RwLock    │
//! │  ┌─────────────────────────┐ │  MissingStrategy (one choice  │
//! │  │ LoadedDataFrame         │ │  per session)                 │
//! │  │ - df: DataFrame         │ ├───────────────────────────────┤
//! │  │ - file_info: FileInfo   │ │  last_resolution: RwLock      │
//! │  └─────────────────────────┘ │  Option<ResolveSummary>       │
//! └──────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! # Thread Safety
//!
//! All state is wrapped in `RwLock` from `parking_lot` (faster than std).
//! This allows safe concurrent access from multiple Tauri command handlers.
//!
//! # Session-Only State
//!
//! Nothing here is persisted to disk. The dataset, the chosen strategy,
//! and the last resolution summary all die with the session.

use lens_analysis::{ColumnKind, MissingStrategy, ResolveSummary};
use parking_lot::RwLock;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

// ============================================================================
// COLUMN & FILE METADATA
// ============================================================================

/// Information about a single column in the loaded dataset.
///
/// Serialized to JSON and sent to the frontend when a file is loaded,
/// so the page can render column headers and the missing-values panel
/// without extra round trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Polars data type as string ("Int64", "Float64", "String").
    pub dtype: String,
    /// Numeric or categorical classification.
    pub kind: ColumnKind,
    /// Number of null/missing values.
    pub null_count: usize,
}

/// Metadata about a loaded dataset.
///
/// Returned by `load_file`/`upload_file` after a successful parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Full path for disk-loaded files; `None` for uploads.
    pub path: Option<String>,
    /// Just the file name (e.g., "data.csv").
    pub name: String,
    pub size_bytes: u64,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnInfo>,
}

// ============================================================================
// DATAFRAME CONTAINER
// ============================================================================

/// Container for a loaded DataFrame and its associated metadata.
///
/// The `DataFrame` itself is not serializable (too large); `FileInfo` is
/// computed once per load or mutation and served from here thereafter.
pub struct LoadedDataFrame {
    /// The Polars `DataFrame` containing all the data.
    pub df: DataFrame,

    /// Cached file metadata, recomputed after resolver mutations.
    pub file_info: FileInfo,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global session state - the single source of truth.
///
/// Managed by Tauri and injected into all command handlers via the
/// `State` extractor, so the resolver and visualizer stay pure functions
/// of explicit input rather than reaching for ambient globals.
pub struct AppState {
    /// Currently loaded dataset with metadata.
    /// `None` when nothing is loaded, `Some(LoadedDataFrame)` after loading.
    /// The resolver mutates the frame in place.
    pub dataframe: RwLock<Option<LoadedDataFrame>>,

    /// The missing-value strategy chosen for this session.
    pub selected_strategy: RwLock<MissingStrategy>,

    /// Summary from the most recent resolver pass.
    /// Cleared when a new dataset is loaded.
    pub last_resolution: RwLock<Option<ResolveSummary>>,
}

impl AppState {
    /// Creates a new `AppState` with no loaded dataset and default settings.
    pub fn new() -> Self {
        Self {
            dataframe: RwLock::new(None),
            selected_strategy: RwLock::new(MissingStrategy::default()),
            last_resolution: RwLock::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
