//! YAML Export functionality
//!
//! Writes the same envelope as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::export::json::ReportEnvelope;
use crate::reports::TabularReport;

/// Write a report as a YAML document
pub fn write_yaml<R: TabularReport, W: Write>(report: &R, writer: &mut W) -> ReportResult<()> {
    let envelope = ReportEnvelope::new(report);

    writeln!(writer, "# rental-reports: {}", envelope.title)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", envelope.generated_at)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", envelope.app_version)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer, "# Rows: {}", envelope.rows.len())
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ReportError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut *writer, &envelope)
        .map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}
