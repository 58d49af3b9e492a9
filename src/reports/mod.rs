//! Reports module for rental-reports
//!
//! Eight read-only reports over a [`Snapshot`](crate::storage::Snapshot):
//! store managers, inventory listings and aggregates, customer listings and
//! payment totals, the investor/advisor union, and actor award buckets.
//!
//! Every report is a pure function of the snapshot it is given. Presentation
//! code works against the [`TabularReport`] trait so it never needs to know
//! which report it is rendering.

pub mod actor_awards;
pub mod customers;
pub mod inventory;
pub mod partners;
pub mod query;
pub mod store_managers;

#[cfg(test)]
pub(crate) mod fixtures;

pub use actor_awards::{AwardBucketReport, AwardBucketRow};
pub use customers::{
    CustomerAddressRow, CustomerPaymentRow, CustomerPaymentsReport, CustomersReport,
};
pub use inventory::{
    CategoryRiskRow, InventoryByStoreReport, InventoryCountReport, InventoryRiskReport,
    InventoryRow, RatingCountRow,
};
pub use partners::{PartnerRow, PartnerType, PartnersReport};
pub use store_managers::{StoreManagerRow, StoreManagersReport};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ReportError;
use crate::models::Money;

/// The eight available reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    StoreManagers,
    InventoryByStore,
    InventoryCount,
    InventoryRisk,
    Customers,
    CustomerPayments,
    InvestorsAdvisors,
    AwardBuckets,
}

impl ReportKind {
    /// All reports in catalog order
    pub fn all() -> &'static [ReportKind] {
        &[
            ReportKind::StoreManagers,
            ReportKind::InventoryByStore,
            ReportKind::InventoryCount,
            ReportKind::InventoryRisk,
            ReportKind::Customers,
            ReportKind::CustomerPayments,
            ReportKind::InvestorsAdvisors,
            ReportKind::AwardBuckets,
        ]
    }

    /// Stable command-line name
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::StoreManagers => "store-managers",
            ReportKind::InventoryByStore => "inventory-by-store",
            ReportKind::InventoryCount => "inventory-count",
            ReportKind::InventoryRisk => "inventory-risk",
            ReportKind::Customers => "customers",
            ReportKind::CustomerPayments => "customer-payments",
            ReportKind::InvestorsAdvisors => "investors-advisors",
            ReportKind::AwardBuckets => "award-buckets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::StoreManagers => "Store Managers and Locations",
            ReportKind::InventoryByStore => "Inventory by Store",
            ReportKind::InventoryCount => "Inventory Count by Store and Rating",
            ReportKind::InventoryRisk => "Replacement Cost Exposure by Store and Category",
            ReportKind::Customers => "Customers with Addresses",
            ReportKind::CustomerPayments => "Customer Rentals and Payments",
            ReportKind::InvestorsAdvisors => "Investors and Advisors",
            ReportKind::AwardBuckets => "Actor Award Buckets",
        }
    }

    /// Output column names, in order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportKind::StoreManagers => &[
                "store_id",
                "manager_first_name",
                "manager_last_name",
                "address",
                "district",
                "city",
                "country",
            ],
            ReportKind::InventoryByStore => &[
                "inventory_id",
                "store_id",
                "film_id",
                "title",
                "rating",
                "rental_rate",
                "replacement_cost",
            ],
            ReportKind::InventoryCount => &["store_id", "rating", "inventory_count"],
            ReportKind::InventoryRisk => &[
                "store_id",
                "category",
                "inventory_count",
                "avg_replacement_cost",
                "total_replacement_cost",
            ],
            ReportKind::Customers => &[
                "customer_id",
                "store_id",
                "first_name",
                "last_name",
                "email",
                "active",
                "address",
                "district",
                "city",
                "country",
            ],
            ReportKind::CustomerPayments => {
                &["first_name", "last_name", "rental_count", "total_payments"]
            }
            ReportKind::InvestorsAdvisors => &["first_name", "last_name", "type", "company_name"],
            ReportKind::AwardBuckets => &["awards_bucket", "actor_ratio"],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ReportKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = ReportKind::all().iter().map(|k| k.name()).collect();
                ReportError::Validation(format!(
                    "Unknown report '{}'. Available: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// One output value, as a relational result would hold it
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Text(String),
    Money(Money),
    /// Averaged amount in currency units
    Decimal(f64),
    /// Fraction between 0 and 1
    Ratio(f64),
    Bool(bool),
}

impl Cell {
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(Cell::Null, |v| Cell::Text(v.to_string()))
    }

    pub fn int(value: Option<i64>) -> Self {
        value.map_or(Cell::Null, Cell::Int)
    }

    pub fn money(value: Option<Money>) -> Self {
        value.map_or(Cell::Null, Cell::Money)
    }

    pub fn decimal(value: Option<f64>) -> Self {
        value.map_or(Cell::Null, Cell::Decimal)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// A report that renders as a table of typed rows
pub trait TabularReport {
    type Row: Serialize;

    fn kind(&self) -> ReportKind;

    fn rows(&self) -> &[Self::Row];

    /// Cells of one row, in [`ReportKind::columns`] order
    fn cells(row: &Self::Row) -> Vec<Cell>;

    fn columns(&self) -> &'static [&'static str] {
        self.kind().columns()
    }

    fn title(&self) -> &'static str {
        self.kind().title()
    }
}
