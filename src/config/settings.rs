//! User settings for rental-reports
//!
//! Holds the data source override and presentation preferences.
//! Settings are only ever read; the tool never writes its config file.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal table (default)
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(ReportError::Validation(format!(
                "Unknown output format '{}'. Use table, csv, json or yaml",
                other
            ))),
        }
    }
}

/// User settings for rental-reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Data directory or bundle file; falls back to `<base>/data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<PathBuf>,

    /// Format used when no `--format` flag is given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Prefix for money cells in table output
    #[serde(default)]
    pub currency_symbol: String,

    /// Marker printed for null cells in table output
    #[serde(default = "default_null_display")]
    pub null_display: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_null_display() -> String {
    "NULL".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_source: None,
            default_format: OutputFormat::default(),
            currency_symbol: String::new(),
            null_display: default_null_display(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// The data source to read: explicit setting, else the default data dir
    pub fn resolve_data_source(&self, paths: &ReportPaths) -> PathBuf {
        self.data_source
            .clone()
            .unwrap_or_else(|| paths.data_dir())
    }
}
