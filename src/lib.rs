//! rental-reports - read-only reporting over a DVD rental store database
//!
//! This library loads the tables of a rental store (stores, staff, locations,
//! films, inventory, customers, rentals, payments, investors, advisors and
//! actor awards) and computes eight fixed reports from them with
//! outer-join, grouping and null-aware aggregate semantics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Table row types, ids and fixed-point money
//! - `storage`: Read-only directory or bundle data sources
//! - `reports`: The eight reports and the join/aggregate helpers they share
//! - `display`: Terminal table rendering
//! - `export`: CSV, JSON and YAML writers
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use rental_reports::reports::CustomerPaymentsReport;
//! use rental_reports::storage::Storage;
//!
//! let snapshot = Storage::open("data").snapshot()?;
//! let report = CustomerPaymentsReport::generate(&snapshot);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ReportError, ReportResult};
