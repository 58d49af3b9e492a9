//! Display formatting for terminal output
//!
//! Renders reports as tables for the terminal. Machine-readable output
//! lives in [`crate::export`].

pub mod report;

pub use report::{format_header, format_report, separator, TableOptions};
