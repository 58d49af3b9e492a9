//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod config;
pub mod report;

pub use config::handle_config_command;
pub use report::{
    handle_all_command, handle_list_command, handle_report_command, handle_status_command,
    GeneratedReport,
};
