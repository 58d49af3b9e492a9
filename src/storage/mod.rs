//! Storage layer for rental-reports
//!
//! Read-only access to the rental data store. A store is either a directory
//! with one JSON file per table or a single JSON/YAML bundle holding every
//! table. Nothing here ever writes.

pub mod file_io;
pub mod snapshot;
pub mod tables;

pub use file_io::{read_document, read_table_file};
pub use snapshot::{Snapshot, TableSource};
pub use tables::{Table, TABLE_NAMES};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, ReportResult};

/// Where table data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Directory of `<table>.json` files
    Directory(PathBuf),
    /// Single `.json` / `.yaml` / `.yml` file keyed by table name
    Bundle(PathBuf),
}

impl DataSource {
    /// Pick the source kind from the path: existing directories and
    /// extension-less paths are directories, known extensions are bundles
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            return DataSource::Directory(path);
        }
        match BundleFormat::from_path(&path) {
            Some(_) => DataSource::Bundle(path),
            None => DataSource::Directory(path),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DataSource::Directory(path) | DataSource::Bundle(path) => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BundleFormat {
    Json,
    Yaml,
}

impl BundleFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(BundleFormat::Json),
            "yaml" | "yml" => Some(BundleFormat::Yaml),
            _ => None,
        }
    }
}

/// Reads tables from a directory of JSON files
struct DirectorySource<'a> {
    dir: &'a Path,
}

impl TableSource for DirectorySource<'_> {
    fn read<T: Table>(&self) -> ReportResult<Vec<T>> {
        let path = self.dir.join(format!("{}.json", T::NAME));
        read_table_file(path, T::NAME)
    }
}

/// Reads tables from a parsed bundle document
enum BundleSource {
    Json(serde_json::Map<String, serde_json::Value>),
    Yaml(serde_yaml::Mapping),
}

impl BundleSource {
    fn parse(path: &Path, format: BundleFormat) -> ReportResult<Self> {
        let contents = read_document(path)?;
        let malformed = |e: &dyn std::fmt::Display| {
            ReportError::StoreUnavailable(format!("Failed to parse {}: {}", path.display(), e))
        };

        match format {
            BundleFormat::Json => {
                let doc: serde_json::Value =
                    serde_json::from_str(&contents).map_err(|e| malformed(&e))?;
                match doc {
                    serde_json::Value::Object(map) => Ok(BundleSource::Json(map)),
                    _ => Err(malformed(&"top level must be an object keyed by table name")),
                }
            }
            BundleFormat::Yaml => {
                let doc: serde_yaml::Value =
                    serde_yaml::from_str(&contents).map_err(|e| malformed(&e))?;
                match doc {
                    serde_yaml::Value::Mapping(map) => Ok(BundleSource::Yaml(map)),
                    _ => Err(malformed(&"top level must be a mapping keyed by table name")),
                }
            }
        }
    }
}

impl TableSource for BundleSource {
    fn read<T: Table>(&self) -> ReportResult<Vec<T>> {
        let missing = || ReportError::schema_mismatch(T::NAME, "table missing from bundle");
        match self {
            BundleSource::Json(map) => {
                let value = map.get(T::NAME).ok_or_else(missing)?;
                serde_json::from_value(value.clone())
                    .map_err(|e| ReportError::schema_mismatch(T::NAME, e.to_string()))
            }
            BundleSource::Yaml(map) => {
                let value = map.get(T::NAME).ok_or_else(missing)?;
                serde_yaml::from_value(value.clone())
                    .map_err(|e| ReportError::schema_mismatch(T::NAME, e.to_string()))
            }
        }
    }
}

/// Entry point to the data store
#[derive(Debug, Clone)]
pub struct Storage {
    source: DataSource,
}

impl Storage {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// Open a directory or bundle path, detecting which it is
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(DataSource::detect(path))
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Read every table as it is right now
    ///
    /// Each call goes back to the source; nothing is cached between calls.
    pub fn snapshot(&self) -> ReportResult<Snapshot> {
        let snapshot = match &self.source {
            DataSource::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(ReportError::StoreUnavailable(format!(
                        "Data directory not found: {}",
                        dir.display()
                    )));
                }
                Snapshot::load(&DirectorySource { dir })?
            }
            DataSource::Bundle(path) => {
                let format = BundleFormat::from_path(path).ok_or_else(|| {
                    ReportError::Validation(format!(
                        "Unsupported bundle extension: {}",
                        path.display()
                    ))
                })?;
                Snapshot::load(&BundleSource::parse(path, format)?)?
            }
        };

        info!(source = %self.source.path().display(), "loaded snapshot");
        Ok(snapshot)
    }

    /// Row count per table
    pub fn table_counts(&self) -> ReportResult<Vec<(&'static str, usize)>> {
        Ok(self.snapshot()?.table_counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Store, StoreId};
    use std::fs;
    use tempfile::TempDir;

    fn write_empty_tables(dir: &Path) {
        for name in TABLE_NAMES {
            fs::write(dir.join(format!("{name}.json")), "[]").unwrap();
        }
    }

    #[test]
    fn test_detect_source_kind() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            DataSource::detect(temp_dir.path()),
            DataSource::Directory(temp_dir.path().to_path_buf())
        );
        assert!(matches!(
            DataSource::detect(temp_dir.path().join("rental.yml")),
            DataSource::Bundle(_)
        ));
        assert!(matches!(
            DataSource::detect(temp_dir.path().join("missing")),
            DataSource::Directory(_)
        ));
    }

    #[test]
    fn test_directory_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        write_empty_tables(temp_dir.path());
        fs::write(
            temp_dir.path().join("store.json"),
            r#"[{"store_id": 1, "manager_staff_id": 1, "address_id": 1}, {"store_id": 2}]"#,
        )
        .unwrap();

        let storage = Storage::open(temp_dir.path());
        let snapshot = storage.snapshot().unwrap();
        assert_eq!(snapshot.stores.len(), 2);
        assert!(snapshot.customers.is_empty());
    }

    #[test]
    fn test_space_separated_datetimes_load() {
        let temp_dir = TempDir::new().unwrap();
        write_empty_tables(temp_dir.path());
        fs::write(
            temp_dir.path().join("rental.json"),
            r#"[{"rental_id": 1, "rental_date": "2005-05-24 22:53:30", "inventory_id": 367,
                 "customer_id": 130, "return_date": "2005-05-26 22:04:30", "staff_id": 1}]"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("payment.json"),
            r#"[{"payment_id": 1, "customer_id": 130, "rental_id": 1, "amount": 2.99,
                 "payment_date": "2005-05-25 11:30:37"}]"#,
        )
        .unwrap();

        let snapshot = Storage::open(temp_dir.path()).snapshot().unwrap();
        assert!(snapshot.rentals[0].rental_date.is_some());
        assert!(snapshot.rentals[0].return_date.is_some());
        assert!(snapshot.payments[0].payment_date.is_some());
    }

    #[test]
    fn test_snapshot_reflects_current_contents() {
        let temp_dir = TempDir::new().unwrap();
        write_empty_tables(temp_dir.path());
        let storage = Storage::open(temp_dir.path());
        assert!(storage.snapshot().unwrap().stores.is_empty());

        fs::write(temp_dir.path().join("store.json"), r#"[{"store_id": 7}]"#).unwrap();
        let counts = storage.table_counts().unwrap();
        assert_eq!(counts[0], ("store", 1));
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(DataSource::Directory(temp_dir.path().join("nope")));
        assert!(storage.snapshot().unwrap_err().is_store_unavailable());
    }

    #[test]
    fn test_missing_table_file_is_schema_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        write_empty_tables(temp_dir.path());
        fs::remove_file(temp_dir.path().join("payment.json")).unwrap();

        let err = Storage::open(temp_dir.path()).snapshot().unwrap_err();
        assert!(matches!(err, ReportError::SchemaMismatch { table: "payment", .. }));
    }

    #[test]
    fn test_yaml_bundle_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rental.yaml");

        let mut snapshot = Snapshot::default();
        snapshot.stores.push(Store::new(StoreId::new(3)));
        fs::write(&path, serde_yaml::to_string(&snapshot).unwrap()).unwrap();

        let loaded = Storage::open(&path).snapshot().unwrap();
        assert_eq!(loaded.stores, snapshot.stores);
    }

    #[test]
    fn test_json_bundle_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rental.json");
        let mut value = serde_json::to_value(Snapshot::default()).unwrap();
        value.as_object_mut().unwrap().remove("actor_award");
        fs::write(&path, value.to_string()).unwrap();

        let err = Storage::open(&path).snapshot().unwrap_err();
        assert!(matches!(err, ReportError::SchemaMismatch { table: "actor_award", .. }));
    }

    #[test]
    fn test_malformed_bundle_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rental.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(Storage::open(&path).snapshot().unwrap_err().is_store_unavailable());
    }
}
