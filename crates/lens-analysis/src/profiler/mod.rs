//! Data profiling module for dataset analysis.
//!
//! This module provides the analyzer half of the pipeline:
//! - Per-column classification (numeric vs categorical, from declared dtype)
//! - Null counts and unique counts
//! - Descriptive statistics for numeric columns
//!
//! Profiling is a pure function of the input frame. The classification tag is
//! recomputed on every pass, so callers that mutate the dataset (the resolver)
//! simply profile again afterwards.

mod statistics;

use crate::error::Result;
use crate::types::{ColumnKind, ColumnProfile, DatasetProfile};
use polars::prelude::*;
use tracing::debug;

pub(crate) use statistics::numeric_summary;

/// Data profiler for analyzing dataset structure and characteristics.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile an entire dataset to understand its structure.
    ///
    /// Never mutates the frame; a zero-row dataset produces a profile with
    /// empty summaries rather than an error.
    pub fn profile_dataset(df: &DataFrame) -> Result<DatasetProfile> {
        let mut columns = Vec::with_capacity(df.width());

        for col_name in df.get_column_names() {
            columns.push(Self::profile_column(df, col_name.as_str())?);
        }

        debug!(
            "Profiled dataset: {} rows x {} columns, {} missing cells",
            df.height(),
            df.width(),
            columns.iter().map(|c: &ColumnProfile| c.null_count).sum::<usize>()
        );

        Ok(DatasetProfile {
            shape: (df.height(), df.width()),
            columns,
        })
    }

    fn profile_column(df: &DataFrame, col_name: &str) -> Result<ColumnProfile> {
        let col = df.column(col_name)?;
        let series = col.as_materialized_series();

        let dtype = format!("{:?}", series.dtype());
        let kind = ColumnKind::of(series.dtype());
        let unique_count = series.n_unique()?;
        let null_count = series.null_count();
        let null_percentage = if df.height() > 0 {
            (null_count as f64 / df.height() as f64) * 100.0
        } else {
            0.0
        };

        let summary = if kind == ColumnKind::Numeric {
            numeric_summary(series)?
        } else {
            None
        };

        Ok(ColumnProfile {
            name: col_name.to_string(),
            dtype,
            kind,
            null_count,
            null_percentage,
            unique_count,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_dataset_shape_and_kinds() {
        let df = df![
            "age" => [Some(30i64), Some(40), None],
            "city" => ["Berlin", "Lagos", "Lima"],
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();

        assert_eq!(profile.shape, (3, 2));
        assert_eq!(profile.columns[0].kind, ColumnKind::Numeric);
        assert_eq!(profile.columns[1].kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_profile_counts_nulls() {
        let df = df![
            "a" => [Some(1.0f64), None, None, Some(4.0)],
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();
        let col = &profile.columns[0];

        assert_eq!(col.null_count, 2);
        assert!((col.null_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_numeric_summary() {
        let df = df![
            "v" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();
        let summary = profile.columns[0].summary.as_ref().unwrap();

        assert_eq!(summary.count, 5);
        assert!((summary.mean - 3.0).abs() < 1e-9);
        assert!((summary.median - 3.0).abs() < 1e-9);
        assert!((summary.min - 1.0).abs() < 1e-9);
        assert!((summary.max - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_categorical_has_no_summary() {
        let df = df![
            "label" => ["x", "y", "x"],
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();
        assert!(profile.columns[0].summary.is_none());
        assert_eq!(profile.columns[0].unique_count, 2);
    }

    #[test]
    fn test_profile_all_null_numeric_column() {
        let df = df![
            "v" => [Option::<f64>::None, None],
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();
        let col = &profile.columns[0];

        assert_eq!(col.null_count, 2);
        assert!(col.summary.is_none());
    }

    #[test]
    fn test_profile_empty_dataset() {
        let df = df![
            "v" => Vec::<f64>::new(),
        ]
        .unwrap();

        let profile = DataProfiler::profile_dataset(&df).unwrap();

        assert_eq!(profile.shape, (0, 1));
        assert_eq!(profile.columns[0].null_percentage, 0.0);
        assert!(profile.columns[0].summary.is_none());
    }

    #[test]
    fn test_profile_does_not_mutate_input() {
        let df = df![
            "a" => [Some(1.0f64), None, Some(3.0)],
            "b" => [Some("x"), Some("y"), None],
        ]
        .unwrap();
        let before = df.clone();

        DataProfiler::profile_dataset(&df).unwrap();

        assert!(df.equals_missing(&before));
    }
}
