//! Shared utilities for the analysis library.
//!
//! This module contains common helper functions used across multiple modules
//! to reduce code duplication and ensure consistency.

use polars::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

// =============================================================================
// Series Statistics Utilities
// =============================================================================

/// Collect the present (non-null) values of a series as f64, in row order.
pub fn collect_numeric_values(series: &Series) -> PolarsResult<Vec<f64>> {
    let casted = series.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().flatten().collect())
}

/// Calculate the mode (most frequent value) of a string-castable Series.
///
/// Ties break to the value whose first occurrence comes earliest in column
/// order, so repeated runs over the same data are deterministic.
pub fn string_mode(series: &Series) -> Option<String> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return None;
    }

    let str_series = non_null.cast(&DataType::String).ok()?;
    let str_chunked = str_series.str().ok()?;

    // value -> (count, index of first occurrence)
    let mut value_counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, val) in str_chunked.into_iter().flatten().enumerate() {
        let entry = value_counts.entry(val.to_string()).or_insert((0, idx));
        entry.0 += 1;
    }

    value_counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(val, _)| val)
}

/// Calculate the mode of a numeric Series, with the same first-occurrence
/// tie-break as [`string_mode`].
pub fn numeric_mode(series: &Series) -> Option<f64> {
    let values = collect_numeric_values(series).ok()?;
    if values.is_empty() {
        return None;
    }

    // f64 is not hashable; key on the bit pattern instead.
    let mut value_counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (idx, val) in values.iter().enumerate() {
        let entry = value_counts.entry(val.to_bits()).or_insert((0, idx));
        entry.0 += 1;
    }

    value_counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(bits, _)| f64::from_bits(bits))
}

/// Linear-interpolated quantile over an already sorted slice.
pub fn quantile_sorted(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let pos = quantile.clamp(0.0, 1.0) * (values.len() as f64 - 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return values[lower];
    }
    let weight = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * weight
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values in a numeric Series with a specific value.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(val.try_extract::<f64>()?));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}

/// Fill null values in a string-castable Series with a specific value.
///
/// Present values are carried over verbatim (not round-tripped through a
/// display format), so existing cells are never altered.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let casted = series.cast(&DataType::String)?;
    let chunked = casted.str()?;

    let result_vec: Vec<String> = chunked
        .into_iter()
        .map(|val| val.unwrap_or(fill_value).to_string())
        .collect();

    Ok(Series::new(series.name().clone(), result_vec))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_collect_numeric_values_skips_nulls() {
        let series = Series::new("test".into(), &[Some(1.0f64), None, Some(3.0)]);
        let values = collect_numeric_values(&series).unwrap();
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_string_mode() {
        let series = Series::new("test".into(), &["a", "b", "a", "c", "a"]);
        assert_eq!(string_mode(&series), Some("a".to_string()));
    }

    #[test]
    fn test_string_mode_tie_breaks_to_first_seen() {
        // "b" and "a" both appear twice; "b" appears first in column order.
        let series = Series::new("test".into(), &["b", "a", "b", "a", "c"]);
        assert_eq!(string_mode(&series), Some("b".to_string()));
    }

    #[test]
    fn test_string_mode_all_null_returns_none() {
        let series: Series = Series::new("test".into(), &[None::<&str>, None]);
        assert_eq!(string_mode(&series), None);
    }

    #[test]
    fn test_numeric_mode() {
        let series = Series::new("test".into(), &[Some(2.0f64), Some(1.0), None, Some(2.0)]);
        assert_eq!(numeric_mode(&series), Some(2.0));
    }

    #[test]
    fn test_numeric_mode_tie_breaks_to_first_seen() {
        let series = Series::new("test".into(), &[5.0f64, 3.0, 5.0, 3.0]);
        assert_eq!(numeric_mode(&series), Some(5.0));
    }

    #[test]
    fn test_quantile_sorted_median() {
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0], 0.5), 2.0);
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
    }

    #[test]
    fn test_quantile_sorted_quartiles_interpolate() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&values, 0.25), 1.75);
        assert_eq!(quantile_sorted(&values, 0.75), 3.25);
    }

    #[test]
    fn test_fill_numeric_nulls() {
        let series = Series::new("test".into(), &[Some(1.0), None, Some(3.0)]);
        let filled = fill_numeric_nulls(&series, 2.0).unwrap();

        assert_eq!(filled.get(0).unwrap().try_extract::<f64>().unwrap(), 1.0);
        assert_eq!(filled.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert_eq!(filled.get(2).unwrap().try_extract::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn test_fill_string_nulls() {
        let series = Series::new("test".into(), &[Some("x"), None, Some("y")]);
        let filled = fill_string_nulls(&series, "z").unwrap();

        assert_eq!(filled.null_count(), 0);
        let values: Vec<String> = filled
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap().to_string())
            .collect();
        assert_eq!(values, vec!["x", "z", "y"]);
    }
}
