//! Textual report rendering for the analyzer.
//!
//! Produces the read-only report the CLI prints: dataset shape, head rows,
//! summary statistics, missing-value counts, and column types. Rendering
//! never touches the frame beyond formatting its head slice.

use crate::types::DatasetProfile;
use polars::prelude::*;
use std::fmt::Write;

const SECTION_RULE: usize = 40;
const HEAD_ROWS: usize = 5;

/// Truncate a string to max length with ellipsis.
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(SECTION_RULE));
}

/// Render the full analysis report as text.
pub fn render_report(df: &DataFrame, profile: &DatasetProfile) -> String {
    let mut out = String::new();

    section(&mut out, "DATASET OVERVIEW");
    let _ = writeln!(out, "  Rows: {}", profile.shape.0);
    let _ = writeln!(out, "  Columns: {}", profile.shape.1);
    let _ = writeln!(out);

    section(&mut out, "FIRST 5 ROWS");
    if df.height() == 0 {
        let _ = writeln!(out, "  (no data)");
    } else {
        let _ = writeln!(out, "{}", df.head(Some(HEAD_ROWS)));
    }
    let _ = writeln!(out);

    section(&mut out, "SUMMARY STATISTICS");
    let numeric = profile.numeric_columns();
    let has_stats = numeric.iter().any(|col| col.summary.is_some());
    if !has_stats {
        let _ = writeln!(out, "  (no data)");
    } else {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        );
        let _ = writeln!(out, "{}", "-".repeat(118));
        for col in &numeric {
            if let Some(summary) = &col.summary {
                let _ = writeln!(
                    out,
                    "{:<20} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                    truncate_str(&col.name, 19),
                    summary.count,
                    summary.mean,
                    summary.std,
                    summary.min,
                    summary.q25,
                    summary.median,
                    summary.q75,
                    summary.max
                );
            } else {
                let _ = writeln!(
                    out,
                    "{:<20} {:>8} (no data)",
                    truncate_str(&col.name, 19),
                    0
                );
            }
        }
    }
    let _ = writeln!(out);

    section(&mut out, "MISSING VALUES");
    if profile.columns.is_empty() {
        let _ = writeln!(out, "  (no data)");
    } else {
        for col in &profile.columns {
            let _ = writeln!(
                out,
                "{:<20} {:>8} ({:.1}%)",
                truncate_str(&col.name, 19),
                col.null_count,
                col.null_percentage
            );
        }
    }
    let _ = writeln!(out);

    section(&mut out, "COLUMN TYPES");
    if profile.columns.is_empty() {
        let _ = writeln!(out, "  (no data)");
    } else {
        for col in &profile.columns {
            let _ = writeln!(
                out,
                "{:<20} {:<12} {:<12}",
                truncate_str(&col.name, 19),
                col.dtype,
                col.kind.as_str()
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::DataProfiler;

    #[test]
    fn test_report_contains_all_sections() {
        let df = df![
            "age" => [Some(30.0), None, Some(40.0)],
            "city" => ["Berlin", "Lagos", "Lima"],
        ]
        .unwrap();
        let profile = DataProfiler::profile_dataset(&df).unwrap();

        let report = render_report(&df, &profile);

        assert!(report.contains("DATASET OVERVIEW"));
        assert!(report.contains("FIRST 5 ROWS"));
        assert!(report.contains("SUMMARY STATISTICS"));
        assert!(report.contains("MISSING VALUES"));
        assert!(report.contains("COLUMN TYPES"));
        assert!(report.contains("Rows: 3"));
        assert!(report.contains("Columns: 2"));
    }

    #[test]
    fn test_report_numeric_stats_row() {
        let df = df![
            "v" => [1.0f64, 2.0, 3.0],
        ]
        .unwrap();
        let profile = DataProfiler::profile_dataset(&df).unwrap();

        let report = render_report(&df, &profile);

        // mean of 1, 2, 3
        assert!(report.contains("2.0000"));
        assert!(report.contains("numeric"));
    }

    #[test]
    fn test_report_empty_dataset_says_no_data() {
        let df = df![
            "v" => Vec::<f64>::new(),
        ]
        .unwrap();
        let profile = DataProfiler::profile_dataset(&df).unwrap();

        let report = render_report(&df, &profile);

        assert!(report.contains("Rows: 0"));
        assert!(report.contains("(no data)"));
    }

    #[test]
    fn test_report_truncates_long_column_names() {
        let df = df![
            "a_very_long_column_name_indeed" => [1.0f64, 2.0],
        ]
        .unwrap();
        let profile = DataProfiler::profile_dataset(&df).unwrap();

        let report = render_report(&df, &profile);
        assert!(report.contains("..."));
    }
}
