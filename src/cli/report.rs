//! CLI commands for reports
//!
//! Generates reports from a fresh snapshot and writes them to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{OutputFormat, Settings};
use crate::display::TableOptions;
use crate::error::{ReportError, ReportResult};
use crate::export;
use crate::reports::{
    AwardBucketReport, CustomerPaymentsReport, CustomersReport, InventoryByStoreReport,
    InventoryCountReport, InventoryRiskReport, PartnersReport, ReportKind, StoreManagersReport,
    TabularReport,
};
use crate::storage::{Snapshot, Storage};

/// Any one of the generated reports
#[derive(Debug, Clone)]
pub enum GeneratedReport {
    StoreManagers(StoreManagersReport),
    InventoryByStore(InventoryByStoreReport),
    InventoryCount(InventoryCountReport),
    InventoryRisk(InventoryRiskReport),
    Customers(CustomersReport),
    CustomerPayments(CustomerPaymentsReport),
    InvestorsAdvisors(PartnersReport),
    AwardBuckets(AwardBucketReport),
}

macro_rules! with_report {
    ($generated:expr, $report:ident => $body:expr) => {
        match $generated {
            GeneratedReport::StoreManagers($report) => $body,
            GeneratedReport::InventoryByStore($report) => $body,
            GeneratedReport::InventoryCount($report) => $body,
            GeneratedReport::InventoryRisk($report) => $body,
            GeneratedReport::Customers($report) => $body,
            GeneratedReport::CustomerPayments($report) => $body,
            GeneratedReport::InvestorsAdvisors($report) => $body,
            GeneratedReport::AwardBuckets($report) => $body,
        }
    };
}

impl GeneratedReport {
    pub fn generate(kind: ReportKind, snapshot: &Snapshot) -> Self {
        match kind {
            ReportKind::StoreManagers => Self::StoreManagers(StoreManagersReport::generate(snapshot)),
            ReportKind::InventoryByStore => {
                Self::InventoryByStore(InventoryByStoreReport::generate(snapshot))
            }
            ReportKind::InventoryCount => Self::InventoryCount(InventoryCountReport::generate(snapshot)),
            ReportKind::InventoryRisk => Self::InventoryRisk(InventoryRiskReport::generate(snapshot)),
            ReportKind::Customers => Self::Customers(CustomersReport::generate(snapshot)),
            ReportKind::CustomerPayments => {
                Self::CustomerPayments(CustomerPaymentsReport::generate(snapshot))
            }
            ReportKind::InvestorsAdvisors => Self::InvestorsAdvisors(PartnersReport::generate(snapshot)),
            ReportKind::AwardBuckets => Self::AwardBuckets(AwardBucketReport::generate(snapshot)),
        }
    }

    pub fn kind(&self) -> ReportKind {
        with_report!(self, report => report.kind())
    }

    pub fn row_count(&self) -> usize {
        with_report!(self, report => report.rows().len())
    }

    pub fn write<W: Write>(
        &self,
        format: OutputFormat,
        options: &TableOptions,
        writer: &mut W,
    ) -> ReportResult<()> {
        with_report!(self, report => export::write_report(report, format, options, writer))
    }

    pub fn envelope_value(&self) -> ReportResult<serde_json::Value> {
        with_report!(self, report => export::envelope_value(report))
    }
}

/// Stdout, or a buffered file when an output path is given
fn open_output(output: Option<&Path>) -> ReportResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ReportError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, output: Option<&Path>, what: &str) -> ReportResult<()> {
    writer
        .flush()
        .map_err(|e| ReportError::Export(e.to_string()))?;
    if let Some(path) = output {
        println!("{} exported to: {}", what, path.display());
    }
    Ok(())
}

/// Handle `report <kind>`
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    kind: ReportKind,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> ReportResult<()> {
    let format = format.unwrap_or(settings.default_format);
    let snapshot = storage.snapshot()?;
    let report = GeneratedReport::generate(kind, &snapshot);

    let mut writer = open_output(output.as_deref())?;
    report.write(format, &TableOptions::from_settings(settings), &mut writer)?;
    finish(writer, output.as_deref(), "Report")
}

/// Handle `all`: every report from a single snapshot, in catalog order
///
/// JSON output is one array of envelopes and YAML output one document per
/// report. Tables and CSV blocks are separated by a blank line.
pub fn handle_all_command(
    storage: &Storage,
    settings: &Settings,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> ReportResult<()> {
    let format = format.unwrap_or(settings.default_format);
    let snapshot = storage.snapshot()?;
    let reports: Vec<_> = ReportKind::all()
        .iter()
        .map(|kind| GeneratedReport::generate(*kind, &snapshot))
        .collect();

    let options = TableOptions::from_settings(settings);
    let mut writer = open_output(output.as_deref())?;
    match format {
        OutputFormat::Json => {
            let envelopes = reports
                .iter()
                .map(GeneratedReport::envelope_value)
                .collect::<ReportResult<Vec<_>>>()?;
            export::write_json_value(&serde_json::Value::Array(envelopes), &mut writer)?;
        }
        OutputFormat::Yaml => {
            for report in &reports {
                writeln!(writer, "---").map_err(|e| ReportError::Export(e.to_string()))?;
                report.write(format, &options, &mut writer)?;
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(writer).map_err(|e| ReportError::Export(e.to_string()))?;
                }
                report.write(format, &options, &mut writer)?;
            }
        }
    }
    finish(writer, output.as_deref(), "Reports")
}

/// Handle `list`
pub fn handle_list_command() -> ReportResult<()> {
    let width = ReportKind::all()
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0);

    println!("Available reports:");
    for kind in ReportKind::all() {
        println!("  {:<width$}  {}", kind.name(), kind.title(), width = width);
    }
    Ok(())
}

/// Handle `status`: row count per table
pub fn handle_status_command(storage: &Storage) -> ReportResult<()> {
    let counts = storage.table_counts()?;
    let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(5);

    println!("Data source: {}", storage.source().path().display());
    println!();
    println!("{:<width$}  {:>8}", "Table", "Rows", width = width);
    println!("{:-<width$}  {:->8}", "", "", width = width);
    for (name, count) in &counts {
        println!("{:<width$}  {:>8}", name, count, width = width);
    }
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    println!("{:-<width$}  {:->8}", "", "", width = width);
    println!("{:<width$}  {:>8}", "Total", total, width = width);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_generate_matches_kind() {
        let snapshot = fixtures::sample();
        for kind in ReportKind::all() {
            let report = GeneratedReport::generate(*kind, &snapshot);
            assert_eq!(report.kind(), *kind);
        }
    }

    #[test]
    fn test_row_counts_from_sample() {
        let snapshot = fixtures::sample();
        let count = |kind| GeneratedReport::generate(kind, &snapshot).row_count();

        assert_eq!(count(ReportKind::StoreManagers), 3);
        assert_eq!(count(ReportKind::InventoryByStore), 8);
        assert_eq!(count(ReportKind::CustomerPayments), 3);
        assert_eq!(count(ReportKind::InvestorsAdvisors), 4);
        assert_eq!(count(ReportKind::AwardBuckets), 3);
    }

    #[test]
    fn test_envelope_names_report() {
        let report = GeneratedReport::generate(ReportKind::InventoryRisk, &fixtures::sample());
        let value = report.envelope_value().unwrap();
        assert_eq!(value["report"], "inventory-risk");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("awards.csv");

        let report = GeneratedReport::generate(ReportKind::AwardBuckets, &fixtures::sample());
        let mut writer = open_output(Some(path.as_path())).unwrap();
        report
            .write(OutputFormat::Csv, &TableOptions::default(), &mut writer)
            .unwrap();
        writer.flush().unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("awards_bucket,actor_ratio\n3 awards,1\n"));
    }
}
