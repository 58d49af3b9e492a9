//! Report formatting for terminal output
//!
//! Renders any [`TabularReport`] as a titled table.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::reports::{Cell, TabularReport};

/// How cell values are spelled in table output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Marker for null cells
    pub null_display: String,
    /// Prefix for money and average cells
    pub currency_symbol: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl TableOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            null_display: settings.null_display.clone(),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Spell one cell for a terminal table
    pub fn format_cell(&self, cell: &Cell) -> String {
        match cell {
            Cell::Null => self.null_display.clone(),
            Cell::Int(value) => value.to_string(),
            Cell::Text(value) => value.clone(),
            Cell::Money(amount) => amount.format_with_symbol(&self.currency_symbol),
            Cell::Decimal(value) => format_decimal(*value, &self.currency_symbol),
            Cell::Ratio(value) => format!("{:.4}", value),
            Cell::Bool(value) => value.to_string(),
        }
    }
}

fn format_decimal(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{}{:.2}", symbol, value.abs())
    } else {
        format!("{}{:.2}", symbol, value)
    }
}

/// Format a report as a titled table, or a "No rows." notice when empty
pub fn format_report<R: TabularReport>(report: &R, options: &TableOptions) -> String {
    let title = report.title();
    let mut output = String::new();

    if report.rows().is_empty() {
        let width = title.len().max(40);
        output.push_str(&format_header(title, width));
        output.push('\n');
        output.push_str(&separator(width));
        output.push('\n');
        output.push_str("No rows.\n");
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record(report.columns().iter().map(|c| c.to_string()));
    for row in report.rows() {
        builder.push_record(R::cells(row).iter().map(|cell| options.format_cell(cell)));
    }
    let mut table = builder.build();
    table.with(Style::modern());
    let rendered = table.to_string();

    let width = rendered
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len());
    output.push_str(&format_header(title, width));
    output.push('\n');
    output.push_str(&rendered);
    output.push('\n');
    output.push_str(&format!("{} row(s)\n", report.rows().len()));
    output
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
