//! Export module for rental-reports
//!
//! Writes reports in every supported output format:
//! - Table: human-readable terminal table
//! - CSV: spreadsheet-compatible, one file per report
//! - JSON: machine-readable envelope with metadata
//! - YAML: the JSON envelope as a commented YAML document

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::write_csv;
pub use json::{envelope_value, write_json, write_json_value, ReportEnvelope, EXPORT_SCHEMA_VERSION};
pub use yaml::write_yaml;

use std::io::Write;

use crate::config::OutputFormat;
use crate::display::{format_report, TableOptions};
use crate::error::{ReportError, ReportResult};
use crate::reports::TabularReport;

/// Write one report in the requested format
pub fn write_report<R: TabularReport, W: Write>(
    report: &R,
    format: OutputFormat,
    options: &TableOptions,
    writer: &mut W,
) -> ReportResult<()> {
    match format {
        OutputFormat::Table => writer
            .write_all(format_report(report, options).as_bytes())
            .map_err(|e| ReportError::Export(e.to_string())),
        OutputFormat::Csv => write_csv(report, writer),
        OutputFormat::Json => write_json(report, writer),
        OutputFormat::Yaml => write_yaml(report, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;
    use crate::reports::InventoryCountReport;

    fn render(format: OutputFormat) -> String {
        let report = InventoryCountReport::generate(&fixtures::sample());
        let mut output = Vec::new();
        write_report(&report, format, &TableOptions::default(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_each_format_writes() {
        assert!(render(OutputFormat::Table).contains("Inventory Count by Store and Rating"));
        assert!(render(OutputFormat::Csv).starts_with("store_id,rating,inventory_count"));
        assert!(render(OutputFormat::Json).contains("\"report\": \"inventory-count\""));
        assert!(render(OutputFormat::Yaml).contains("report: inventory-count"));
    }
}
