//! File I/O for the read-only data store
//!
//! Maps filesystem and parse failures onto the store error taxonomy:
//! an unreadable source is `StoreUnavailable`, a missing table or a row that
//! doesn't fit the expected columns is `SchemaMismatch`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ReportError, ReportResult};

/// Read one table file holding a JSON array of rows
pub fn read_table_file<T, P>(path: P, table: &'static str) -> ReportResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReportError::schema_mismatch(
            table,
            format!("table file not found: {}", path.display()),
        ));
    }

    let file = File::open(path).map_err(|e| {
        ReportError::StoreUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            ReportError::StoreUnavailable(format!("Failed to read {}: {}", path.display(), e))
        } else {
            ReportError::schema_mismatch(table, e.to_string())
        }
    })
}

/// Read a whole document (bundle file) into memory
pub fn read_document<P: AsRef<Path>>(path: P) -> ReportResult<String> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ReportError::StoreUnavailable(format!(
            "Data file not found: {}",
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        ReportError::StoreUnavailable(format!("Failed to read {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i32,
        name: String,
    }

    #[test]
    fn test_read_table_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#).unwrap();

        let rows: Vec<Row> = read_table_file(&path, "rows").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "b");
    }

    #[test]
    fn test_missing_table_is_schema_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = read_table_file::<Row, _>(&path, "rows").unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, r#"[{"id": 1}]"#).unwrap();

        let err = read_table_file::<Row, _>(&path, "rows").unwrap_err();
        match err {
            ReportError::SchemaMismatch { table, detail } => {
                assert_eq!(table, "rows");
                assert!(detail.contains("name"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_document_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_document(temp_dir.path().join("bundle.yaml")).unwrap_err();
        assert!(err.is_store_unavailable());
    }
}
