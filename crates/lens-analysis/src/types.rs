use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

/// Classification of a column for analysis purposes.
///
/// Computed from the declared polars dtype, once per profiling pass, and
/// re-derived after any resolver mutation. Fill strategies and chart
/// selection branch on this tag instead of probing dtypes ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating point column.
    Numeric,
    /// Everything else: strings, booleans, dates.
    Categorical,
}

impl ColumnKind {
    /// Derive the classification from a declared dtype.
    pub fn of(dtype: &DataType) -> Self {
        if crate::utils::is_numeric_dtype(dtype) {
            Self::Numeric
        } else {
            Self::Categorical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

/// Descriptive statistics for a numeric column, computed over present values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of present (non-null) values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Polars dtype as string ("Int64", "Float64", "String", ...).
    pub dtype: String,
    pub kind: ColumnKind,
    pub null_count: usize,
    pub null_percentage: f64,
    pub unique_count: usize,
    /// Present for numeric columns with at least one present value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<NumericSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// (rows, columns).
    pub shape: (usize, usize),
    pub columns: Vec<ColumnProfile>,
}

impl DatasetProfile {
    /// Names of numeric-classified columns, in original column order.
    pub fn numeric_columns(&self) -> Vec<&ColumnProfile> {
        self.columns
            .iter()
            .filter(|col| col.kind == ColumnKind::Numeric)
            .collect()
    }

    /// Names of categorical-classified columns, in original column order.
    pub fn categorical_columns(&self) -> Vec<&ColumnProfile> {
        self.columns
            .iter()
            .filter(|col| col.kind == ColumnKind::Categorical)
            .collect()
    }

    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|col| col.null_count).sum()
    }
}

/// Everything one analysis pass produces: the profile plus the chart
/// artifacts derived from it. This is what the interactive variant sends
/// to the page and what the CLI serializes under `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub profile: DatasetProfile,
    pub charts: crate::charts::ChartSet,
}

/// Summary of what a resolver pass did to the dataset.
///
/// Serialized and sent to the frontend after `apply_missing_strategy`,
/// and rendered in test assertions. Mirrors the before/after shape of the
/// dataset plus a human-readable action ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveSummary {
    /// The strategy that was applied, in its kebab-case wire form.
    pub strategy: String,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    /// One entry per column touched (or one dataset-level entry for drops).
    pub actions: Vec<String>,
}

impl ResolveSummary {
    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }

    pub fn columns_removed(&self) -> usize {
        self.columns_before.saturating_sub(self.columns_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_of_dtype() {
        assert_eq!(ColumnKind::of(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of(&DataType::Float64), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of(&DataType::UInt32), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of(&DataType::String), ColumnKind::Categorical);
        assert_eq!(ColumnKind::of(&DataType::Boolean), ColumnKind::Categorical);
        assert_eq!(ColumnKind::of(&DataType::Date), ColumnKind::Categorical);
    }

    #[test]
    fn test_column_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ColumnKind::Numeric).unwrap(),
            "\"numeric\""
        );
        assert_eq!(
            serde_json::to_string(&ColumnKind::Categorical).unwrap(),
            "\"categorical\""
        );
    }

    #[test]
    fn test_resolve_summary_removed_counts() {
        let summary = ResolveSummary {
            strategy: "drop-rows".to_string(),
            rows_before: 10,
            rows_after: 7,
            columns_before: 4,
            columns_after: 4,
            actions: vec!["Dropped 3 rows containing missing values".to_string()],
        };
        assert_eq!(summary.rows_removed(), 3);
        assert_eq!(summary.columns_removed(), 0);
    }
}
