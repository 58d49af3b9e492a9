//! CSV Export functionality
//!
//! One header record of column names, then one record per row. Null cells
//! become empty fields.

use std::io::Write;

use crate::error::ReportResult;
use crate::reports::{Cell, TabularReport};

/// Spell one cell for CSV, with no currency symbol or padding
fn csv_field(cell: &Cell) -> String {
    match cell {
        Cell::Null => String::new(),
        Cell::Int(value) => value.to_string(),
        Cell::Text(value) => value.clone(),
        Cell::Money(amount) => amount.to_string(),
        Cell::Decimal(value) | Cell::Ratio(value) => value.to_string(),
        Cell::Bool(value) => value.to_string(),
    }
}

/// Write a report as CSV
pub fn write_csv<R: TabularReport, W: Write>(report: &R, writer: &mut W) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(report.columns())?;
    for row in report.rows() {
        csv_writer.write_record(R::cells(row).iter().map(csv_field))?;
    }
    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;
    use crate::reports::{CustomerPaymentsReport, InventoryCountReport, PartnersReport};

    fn render<R: TabularReport>(report: &R) -> String {
        let mut output = Vec::new();
        write_csv(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = render(&CustomerPaymentsReport::generate(&fixtures::sample()));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "first_name,last_name,rental_count,total_payments");
        assert_eq!(lines[1], "MARY,SMITH,3,8.97");
        assert_eq!(lines[2], "PATRICIA,JOHNSON,3,6.99");
        // null sum becomes an empty field
        assert_eq!(lines[3], "LINDA,WILLIAMS,0,");
    }

    #[test]
    fn test_csv_partner_rows() {
        let csv = render(&PartnersReport::generate(&fixtures::sample()));
        assert!(csv.contains("Montgomery,Burns,investor,Springfield Nuclear Power Plant"));
        assert!(csv.contains("Anthony,Hoffman,advisor,\n"));
    }

    #[test]
    fn test_csv_null_rating() {
        let csv = render(&InventoryCountReport::generate(&fixtures::sample()));
        assert!(csv.lines().any(|line| line == "2,,2"));
    }

    #[test]
    fn test_csv_field_values() {
        assert_eq!(csv_field(&Cell::Null), "");
        assert_eq!(csv_field(&Cell::Ratio(0.5)), "0.5");
        assert_eq!(csv_field(&Cell::Bool(true)), "true");
    }
}
