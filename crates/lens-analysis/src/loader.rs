//! Dataset loading.
//!
//! Reads CSV content into a polars `DataFrame`, either from a file-system
//! path (CLI variant) or from an uploaded byte buffer (interactive variant).
//! The format gate is deliberately simple: a `.csv` extension and a parseable
//! comma-delimited body with a header row.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Rows sampled for schema inference. A generous sample keeps a column that
/// starts out integer-looking from being mistyped when floats appear later.
const INFER_SCHEMA_ROWS: usize = 1000;

fn has_csv_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn csv_read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
}

/// Load a dataset from the given file path.
///
/// Fails with [`AnalysisError::NotFound`] if the path does not exist and
/// [`AnalysisError::UnsupportedFormat`] if the file is not CSV.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();

    // Check existence first for a clearer message than a generic I/O error.
    if !path.exists() {
        return Err(AnalysisError::NotFound(path.display().to_string()));
    }

    if !has_csv_extension(&path.display().to_string()) {
        return Err(AnalysisError::UnsupportedFormat(path.display().to_string()));
    }

    debug!("Loading dataset from {}", path.display());

    let df = csv_read_options()
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    debug!("Dataset loaded: {:?}", df.shape());
    Ok(df)
}

/// Load a dataset from an uploaded byte buffer.
///
/// `name` is the upload's file name and is used for the format gate only;
/// the bytes themselves are parsed from memory. Parse failures surface as
/// [`AnalysisError::UnsupportedFormat`] so the page can show a single
/// "not a CSV" message for both a bad extension and a malformed body.
pub fn load_dataset_from_bytes(name: &str, bytes: &[u8]) -> Result<DataFrame> {
    if !has_csv_extension(name) {
        return Err(AnalysisError::UnsupportedFormat(name.to_string()));
    }

    debug!("Parsing uploaded dataset '{}' ({} bytes)", name, bytes.len());

    csv_read_options()
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
        .map_err(|e| {
            debug!("Upload parse failed: {}", e);
            AnalysisError::UnsupportedFormat(name.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_dataset_basic() {
        let file = write_temp_csv("a,b\n1,x\n2,y\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_column_names()[0].as_str(), "a");
    }

    #[test]
    fn test_load_dataset_infers_types() {
        let file = write_temp_csv("num,text\n1.5,hello\n2.5,world\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.column("num").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("text").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_load_dataset_empty_cells_become_nulls() {
        let file = write_temp_csv("a,b\n1,x\n,y\n3,\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.column("a").unwrap().null_count(), 1);
        assert_eq!(df.column("b").unwrap().null_count(), 1);
    }

    #[test]
    fn test_load_dataset_missing_path() {
        let result = load_dataset("/definitely/not/here.csv");
        assert!(matches!(result, Err(AnalysisError::NotFound(_))));
    }

    #[test]
    fn test_load_dataset_rejects_non_csv_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();
        file.write_all(b"a,b\n1,2\n").unwrap();

        let result = load_dataset(file.path());
        assert!(matches!(result, Err(AnalysisError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_dataset_accepts_uppercase_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".CSV")
            .tempfile()
            .unwrap();
        file.write_all(b"a\n1\n").unwrap();

        assert!(load_dataset(file.path()).is_ok());
    }

    #[test]
    fn test_load_from_bytes() {
        let df = load_dataset_from_bytes("upload.csv", b"a,b\n1,x\n2,y\n").unwrap();
        assert_eq!(df.shape(), (2, 2));
    }

    #[test]
    fn test_load_from_bytes_rejects_bad_name() {
        let result = load_dataset_from_bytes("upload.json", b"{}");
        assert!(matches!(result, Err(AnalysisError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_dataset_quoted_strings() {
        let file = write_temp_csv("name,city\n\"Doe, Jane\",Berlin\nBo,\"Sao Paulo\"\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.shape(), (2, 2));
        let name = df.column("name").unwrap();
        assert!(name.get(0).unwrap().to_string().contains("Doe, Jane"));
    }
}
