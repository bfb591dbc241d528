//! CSV Exploratory Data Analysis Library
//!
//! Loads CSV datasets into Polars frames, profiles them, resolves missing
//! values, and derives chart artifacts for an external plotting collaborator.
//!
//! # Overview
//!
//! The library is organized around four pipeline stages:
//!
//! - **Loader**: path- and upload-based CSV reading with format validation
//! - **Analyzer**: per-column profiling (types, null counts, descriptive
//!   statistics) and a textual report
//! - **Missing-Value Resolver**: six fixed strategies applied column-wise
//! - **Visualizer**: histogram, correlation-heatmap, and count-plot data
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lens_analysis::{loader, charts, resolver, MissingStrategy};
//!
//! let mut df = loader::load_dataset("data.csv")?;
//! let report = charts::analyze(&df)?;
//! println!("{} rows, {} columns", report.profile.shape.0, report.profile.shape.1);
//!
//! resolver::apply_strategy(&mut df, MissingStrategy::FillMean)?;
//! let after = charts::analyze(&df)?;
//! assert_eq!(after.profile.total_missing(), 0);
//! ```
//!
//! Profiling is a pure function of its input; the resolver is the only
//! stage that mutates a frame, and classification is re-derived on the
//! next profiling pass rather than cached across mutations.

pub mod charts;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod report;
pub mod resolver;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use charts::{
    analyze, build_chart_set, CategoryCount, ChartSet, CountPlot, HeatmapMatrix, HistogramBin,
    HistogramChart, HISTOGRAM_BINS,
};
pub use error::{AnalysisError, Result as AnalysisResult};
pub use loader::{load_dataset, load_dataset_from_bytes};
pub use profiler::DataProfiler;
pub use report::render_report;
pub use resolver::{apply_strategy, MissingStrategy};
pub use types::{
    AnalysisReport, ColumnKind, ColumnProfile, DatasetProfile, NumericSummary, ResolveSummary,
};
