//! Missing-value resolution.
//!
//! Applies one of six fixed strategies to a dataset, column-wise. The
//! strategy set is a closed enumeration handled by a single exhaustive
//! match, so adding a variant forces every dispatch site to be revisited.
//!
//! Fill strategies re-derive the column classification from the declared
//! dtype at application time; numeric fills only touch numeric-classified
//! columns, mode fills touch any column with missing entries. A column
//! that is entirely missing has no mean/median/mode and is left unchanged.

use crate::error::Result;
use crate::types::{ColumnKind, ResolveSummary};
use crate::utils::{fill_numeric_nulls, fill_string_nulls, numeric_mode, string_mode};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Policy for resolving missing entries, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingStrategy {
    /// Leave the dataset unchanged.
    #[default]
    None,
    /// Fill numeric columns with their mean over present values.
    FillMean,
    /// Fill numeric columns with their median over present values.
    FillMedian,
    /// Fill any column with its most frequent present value.
    FillMode,
    /// Remove every row containing at least one missing entry.
    DropRows,
    /// Remove every column containing at least one missing entry.
    DropColumns,
}

impl MissingStrategy {
    /// All strategies, in the order they are offered to the user.
    pub const ALL: [MissingStrategy; 6] = [
        MissingStrategy::None,
        MissingStrategy::FillMean,
        MissingStrategy::FillMedian,
        MissingStrategy::FillMode,
        MissingStrategy::DropRows,
        MissingStrategy::DropColumns,
    ];

    /// The kebab-case wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FillMean => "fill-mean",
            Self::FillMedian => "fill-median",
            Self::FillMode => "fill-mode",
            Self::DropRows => "drop-rows",
            Self::DropColumns => "drop-columns",
        }
    }
}

impl std::fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a missing-value strategy to the dataset in place.
///
/// Returns a summary of the mutation: shape before/after and one action
/// entry per column touched (or per dataset-level drop).
pub fn apply_strategy(df: &mut DataFrame, strategy: MissingStrategy) -> Result<ResolveSummary> {
    let rows_before = df.height();
    let columns_before = df.width();
    let mut actions = Vec::new();

    debug!("Applying missing-value strategy '{}'", strategy);

    match strategy {
        MissingStrategy::None => {}
        MissingStrategy::FillMean => {
            fill_numeric_columns(df, "mean", |s| s.mean(), &mut actions)?;
        }
        MissingStrategy::FillMedian => {
            fill_numeric_columns(df, "median", |s| s.median(), &mut actions)?;
        }
        MissingStrategy::FillMode => {
            fill_mode_columns(df, &mut actions)?;
        }
        MissingStrategy::DropRows => {
            drop_missing_rows(df, &mut actions)?;
        }
        MissingStrategy::DropColumns => {
            drop_missing_columns(df, &mut actions)?;
        }
    }

    Ok(ResolveSummary {
        strategy: strategy.as_str().to_string(),
        rows_before,
        rows_after: df.height(),
        columns_before,
        columns_after: df.width(),
        actions,
    })
}

/// Fill nulls in every numeric column using `stat` (mean or median).
///
/// Non-numeric columns and columns without missing entries are skipped;
/// so is a column whose statistic cannot be computed (all values missing).
fn fill_numeric_columns(
    df: &mut DataFrame,
    label: &str,
    stat: impl Fn(&Series) -> Option<f64>,
    actions: &mut Vec<String>,
) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    for name in names {
        let series = df.column(&name)?.as_materialized_series().clone();
        if ColumnKind::of(series.dtype()) != ColumnKind::Numeric || series.null_count() == 0 {
            continue;
        }

        let Some(fill_value) = stat(&series) else {
            // Entirely missing column: no statistic to fill with.
            continue;
        };

        let filled = fill_numeric_nulls(&series, fill_value)?;
        df.replace(&name, filled)?;
        actions.push(format!(
            "Filled '{}' with {}: {:.2}",
            name, label, fill_value
        ));
    }

    Ok(())
}

/// Fill nulls in every column (any classification) with the column's mode.
fn fill_mode_columns(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    for name in names {
        let series = df.column(&name)?.as_materialized_series().clone();
        if series.null_count() == 0 {
            continue;
        }

        match ColumnKind::of(series.dtype()) {
            ColumnKind::Numeric => {
                let Some(mode) = numeric_mode(&series) else {
                    continue;
                };
                let filled = fill_numeric_nulls(&series, mode)?;
                df.replace(&name, filled)?;
                actions.push(format!("Filled '{}' with mode: {:.2}", name, mode));
            }
            ColumnKind::Categorical => {
                let Some(mode) = string_mode(&series) else {
                    continue;
                };
                let filled = fill_string_nulls(&series, &mode)?;
                df.replace(&name, filled)?;
                actions.push(format!("Filled '{}' with mode: '{}'", name, mode));
            }
        }
    }

    Ok(())
}

/// Remove every row that has a null in any column, preserving row order.
fn drop_missing_rows(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let rows_before = df.height();
    if rows_before == 0 || df.width() == 0 {
        return Ok(());
    }

    let mut has_null = BooleanChunked::full("has_null".into(), false, rows_before);
    for col in df.get_columns() {
        has_null = &has_null | &col.as_materialized_series().is_null();
    }

    let keep = !&has_null;
    let filtered = df.filter(&keep)?;
    *df = filtered;

    let removed = rows_before - df.height();
    if removed > 0 {
        actions.push(format!("Dropped {} rows containing missing values", removed));
    } else {
        actions.push("No rows with missing values found".to_string());
    }

    Ok(())
}

/// Remove every column that has at least one null, preserving column order.
fn drop_missing_columns(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let columns_before = df.width();
    let keep: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|col| col.null_count() == 0)
        .map(|col| col.name().clone())
        .collect();

    let removed = columns_before - keep.len();
    let selected = df.select(keep)?;
    *df = selected;

    if removed > 0 {
        actions.push(format!("Dropped {} columns containing missing values", removed));
    } else {
        actions.push("No columns with missing values found".to_string());
    }

    Ok(())
}
