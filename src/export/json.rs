//! JSON Export functionality
//!
//! Writes a report wrapped in a versioned envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::reports::TabularReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One report with the metadata needed to read it back
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Report name, as accepted on the command line
    pub report: &'static str,

    pub title: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Column names, in row field order
    pub columns: &'static [&'static str],

    pub rows: &'a [T],
}

impl<'a, T: Serialize> ReportEnvelope<'a, T> {
    pub fn new<R>(report: &'a R) -> Self
    where
        R: TabularReport<Row = T>,
    {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            report: report.kind().name(),
            title: report.title(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            columns: report.columns(),
            rows: report.rows(),
        }
    }
}

/// Build the envelope of a report as a JSON value
pub fn envelope_value<R: TabularReport>(report: &R) -> ReportResult<serde_json::Value> {
    serde_json::to_value(ReportEnvelope::new(report))
        .map_err(|e| ReportError::Export(format!("Failed to serialize {}: {}", report.kind(), e)))
}

/// Write a report as pretty-printed JSON
pub fn write_json<R: TabularReport, W: Write>(report: &R, writer: &mut W) -> ReportResult<()> {
    let value = envelope_value(report)?;
    write_json_value(&value, writer)
}

/// Write an already-built value (one envelope or an array of them)
pub fn write_json_value<W: Write>(value: &serde_json::Value, writer: &mut W) -> ReportResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ReportError::Export(e.to_string()))?;
    Ok(())
}
