//! Configuration module for rental-reports
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Read-only user settings

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::{OutputFormat, Settings};
