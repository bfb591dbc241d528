//! Chart artifact derivation (the visualizer).
//!
//! This module selects which columns feed which chart type and packages
//! the data as plain serde structs. Rendering is delegated to an external
//! plotting collaborator: the webview page in the interactive variant, or
//! whatever consumes the JSON the CLI emits.
//!
//! - One histogram per numeric column, fixed bucket count.
//! - One correlation heatmap over all numeric columns pairwise, only when
//!   at least two numeric columns exist.
//! - One count plot per categorical column.

use crate::error::Result;
use crate::profiler::DataProfiler;
use crate::types::{AnalysisReport, DatasetProfile};
use crate::utils::collect_numeric_values;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bucket count for numeric distribution histograms.
pub const HISTOGRAM_BINS: usize = 20;

/// A single histogram bucket over `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Distribution histogram for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramChart {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Heatmap matrix structure for pairwise correlations.
///
/// `values[i][j]` is the coefficient between `y_labels[i]` and
/// `x_labels[j]`; the collaborator annotates each cell with its value.
/// Cells that cannot be computed (fewer than two jointly present pairs,
/// or a constant column) are NaN and serialize to JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Frequency entry for one category value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Value-frequency chart for one categorical column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountPlot {
    pub column: String,
    pub entries: Vec<CategoryCount>,
}

/// The full set of chart artifacts derived from one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSet {
    pub histograms: Vec<HistogramChart>,
    /// Present only when the dataset has at least two numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<HeatmapMatrix>,
    pub count_plots: Vec<CountPlot>,
}

/// Profile the dataset and derive its chart artifacts in one pass.
pub fn analyze(df: &DataFrame) -> Result<AnalysisReport> {
    let profile = DataProfiler::profile_dataset(df)?;
    let charts = build_chart_set(df, &profile)?;
    Ok(AnalysisReport { profile, charts })
}

/// Derive all chart artifacts for a profiled dataset.
pub fn build_chart_set(df: &DataFrame, profile: &DatasetProfile) -> Result<ChartSet> {
    let mut histograms = Vec::new();
    let mut numeric_values: Vec<(String, Vec<Option<f64>>)> = Vec::new();

    for col in profile.numeric_columns() {
        let series = df.column(&col.name)?.as_materialized_series().clone();

        let mut present = collect_numeric_values(&series)?;
        present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        histograms.push(HistogramChart {
            column: col.name.clone(),
            bins: build_histogram(&present, HISTOGRAM_BINS),
        });

        // Keep the full (null-positioned) values for pairwise correlation.
        let casted = series.cast(&DataType::Float64)?;
        numeric_values.push((col.name.clone(), casted.f64()?.into_iter().collect()));
    }

    let correlation = if numeric_values.len() > 1 {
        Some(build_correlation_matrix(&numeric_values))
    } else {
        None
    };

    let mut count_plots = Vec::new();
    for col in profile.categorical_columns() {
        let series = df.column(&col.name)?.as_materialized_series().clone();
        count_plots.push(CountPlot {
            column: col.name.clone(),
            entries: count_values(&series)?,
        });
    }

    Ok(ChartSet {
        histograms,
        correlation,
        count_plots,
    })
}

/// Bucket sorted values into a fixed number of equal-width bins.
fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.first().copied().unwrap_or(0.0);
    let max = values.last().copied().unwrap_or(min);
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let bin_count = bins.max(1);
    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];

    for value in values {
        let mut index = ((value - min) / width) as usize;
        if index >= bin_count {
            index = bin_count - 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            start: min + idx as f64 * width,
            end: min + (idx as f64 + 1.0) * width,
            count,
        })
        .collect()
}

/// Pairwise-complete Pearson correlation over the numeric columns.
fn build_correlation_matrix(columns: &[(String, Vec<Option<f64>>)]) -> HeatmapMatrix {
    let labels: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
    let size = columns.len();
    let mut values = vec![vec![f64::NAN; size]; size];

    for i in 0..size {
        values[i][i] = 1.0;
        for j in (i + 1)..size {
            let mut x = Vec::new();
            let mut y = Vec::new();
            for (a, b) in columns[i].1.iter().zip(columns[j].1.iter()) {
                if let (Some(a), Some(b)) = (a, b) {
                    x.push(*a);
                    y.push(*b);
                }
            }

            if let Some(r) = pearson(&x, &y) {
                values[i][j] = r;
                values[j][i] = r;
            }
        }
    }

    HeatmapMatrix {
        x_labels: labels.clone(),
        y_labels: labels,
        values,
    }
}

/// Pearson correlation coefficient; `None` for fewer than two pairs or a
/// constant input.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 {
        return None;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(covariance / (var_x.sqrt() * var_y.sqrt()))
}

/// Value frequencies for a categorical column, descending by count.
///
/// Ties keep first-occurrence order so repeated runs are deterministic.
fn count_values(series: &Series) -> Result<Vec<CategoryCount>> {
    let casted = series.cast(&DataType::String)?;
    let chunked = casted.str()?;

    // value -> (count, index of first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut total = 0usize;
    for (idx, value) in chunked.into_iter().flatten().enumerate() {
        let entry = counts.entry(value.to_string()).or_insert((0, idx));
        entry.0 += 1;
        total += 1;
    }

    let mut entries: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(entries
        .into_iter()
        .map(|(value, count, _)| CategoryCount {
            percentage: if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            },
            value,
            count,
        })
        .collect())
}
