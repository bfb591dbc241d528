//! Descriptive statistics for column profiling.

use crate::error::Result;
use crate::types::NumericSummary;
use crate::utils::{collect_numeric_values, quantile_sorted};
use polars::prelude::*;

/// Compute the descriptive summary of a numeric column over present values.
///
/// Returns `None` when the column has no present values; callers render
/// that as a "no data" section instead of failing.
pub(crate) fn numeric_summary(series: &Series) -> Result<Option<NumericSummary>> {
    let mut values = collect_numeric_values(series)?;
    if values.is_empty() {
        return Ok(None);
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = sample_std(&values, mean);

    Ok(Some(NumericSummary {
        count,
        mean,
        std,
        min: *values.first().unwrap_or(&0.0),
        q25: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q75: quantile_sorted(&values, 0.75),
        max: *values.last().unwrap_or(&0.0),
    }))
}

/// Sample standard deviation (n - 1 denominator), 0.0 for fewer than two values.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_std_basic() {
        // Values: 1, 2, 3, 4, 5
        // Mean = 3, Variance = 10/4 = 2.5, Std = sqrt(2.5) ~ 1.58
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let std = sample_std(&values, 3.0);
        assert!((std - 1.58).abs() < 0.1);
    }

    #[test]
    fn test_sample_std_single_value() {
        assert_eq!(sample_std(&[5.0], 5.0), 0.0);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0, 5.0], 5.0), 0.0);
    }

    #[test]
    fn test_numeric_summary_quartiles() {
        let series = Series::new("v".into(), &[4.0f64, 1.0, 3.0, 2.0]);
        let summary = numeric_summary(&series).unwrap().unwrap();

        assert_eq!(summary.count, 4);
        assert!((summary.q25 - 1.75).abs() < 1e-9);
        assert!((summary.median - 2.5).abs() < 1e-9);
        assert!((summary.q75 - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_summary_ignores_nulls() {
        let series = Series::new("v".into(), &[Some(1.0f64), None, Some(3.0)]);
        let summary = numeric_summary(&series).unwrap().unwrap();

        assert_eq!(summary.count, 2);
        assert!((summary.mean - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_summary_all_null_returns_none() {
        let series = Series::new("v".into(), &[Option::<f64>::None, None]);
        assert!(numeric_summary(&series).unwrap().is_none());
    }

    #[test]
    fn test_numeric_summary_integer_column() {
        let series = Series::new("v".into(), &[10i64, 20, 30]);
        let summary = numeric_summary(&series).unwrap().unwrap();

        assert!((summary.mean - 20.0).abs() < 1e-9);
        assert!((summary.min - 10.0).abs() < 1e-9);
        assert!((summary.max - 30.0).abs() < 1e-9);
    }
}
