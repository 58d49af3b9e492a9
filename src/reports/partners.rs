//! Investors and Advisors Report
//!
//! Set union of investor and advisor name projections. Advisors have no
//! company, so theirs is always null. Exact duplicate rows collapse.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::{Cell, ReportKind, TabularReport};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Investor,
    Advisor,
}

impl PartnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::Investor => "investor",
            PartnerType::Advisor => "advisor",
        }
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PartnerRow {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub partner_type: PartnerType,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PartnersReport {
    pub rows: Vec<PartnerRow>,
}

impl PartnersReport {
    /// investors UNION advisors, first occurrence wins
    pub fn generate(snapshot: &Snapshot) -> Self {
        let investors = snapshot.investors.iter().map(|i| PartnerRow {
            first_name: i.first_name.clone(),
            last_name: i.last_name.clone(),
            partner_type: PartnerType::Investor,
            company_name: i.company_name.clone(),
        });
        let advisors = snapshot.advisors.iter().map(|a| PartnerRow {
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            partner_type: PartnerType::Advisor,
            company_name: None,
        });

        let mut seen = HashSet::new();
        let rows: Vec<_> = investors
            .chain(advisors)
            .filter(|row| seen.insert(row.clone()))
            .collect();

        debug!(report = "investors-advisors", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for PartnersReport {
    type Row = PartnerRow;

    fn kind(&self) -> ReportKind {
        ReportKind::InvestorsAdvisors
    }

    fn rows(&self) -> &[PartnerRow] {
        &self.rows
    }

    fn cells(row: &PartnerRow) -> Vec<Cell> {
        vec![
            Cell::Text(row.first_name.clone()),
            Cell::Text(row.last_name.clone()),
            Cell::Text(row.partner_type.to_string()),
            Cell::text(row.company_name.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Advisor, AdvisorId};
    use crate::reports::fixtures;

    #[test]
    fn test_union_collapses_exact_duplicates() {
        let report = PartnersReport::generate(&fixtures::sample());

        // 3 investors with one exact duplicate, plus 2 advisors
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0].first_name, "Montgomery");
        assert_eq!(
            report.rows[0].company_name.as_deref(),
            Some("Springfield Nuclear Power Plant")
        );
    }

    #[test]
    fn test_type_keeps_same_name_rows_apart() {
        let report = PartnersReport::generate(&fixtures::sample());
        let hoffmans: Vec<_> = report
            .rows
            .iter()
            .filter(|r| r.last_name == "Hoffman")
            .map(|r| r.partner_type)
            .collect();
        assert_eq!(hoffmans, vec![PartnerType::Investor, PartnerType::Advisor]);
    }

    #[test]
    fn test_advisors_have_null_company() {
        let mut snapshot = fixtures::sample();
        snapshot.advisors.push(Advisor {
            advisor_id: AdvisorId::new(3),
            first_name: "Barry".into(),
            last_name: "Johnson".into(),
            is_chairman: Some(true),
        });

        let report = PartnersReport::generate(&snapshot);
        let advisors: Vec<_> = report
            .rows
            .iter()
            .filter(|r| r.partner_type == PartnerType::Advisor)
            .collect();
        // the repeated Barry Johnson collapses
        assert_eq!(advisors.len(), 2);
        assert!(advisors.iter().all(|r| r.company_name.is_none()));
    }

    #[test]
    fn test_type_column_name() {
        let report = PartnersReport::generate(&fixtures::sample());
        let json = serde_json::to_value(&report.rows[0]).unwrap();
        assert_eq!(json["type"], "investor");
    }
}
