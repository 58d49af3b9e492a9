//! `config` command: resolved paths and effective settings

use crate::config::{ReportPaths, Settings};
use crate::error::ReportResult;
use crate::storage::{DataSource, Storage};

fn source_kind(source: &DataSource) -> &'static str {
    match source {
        DataSource::Directory(_) => "directory",
        DataSource::Bundle(_) => "bundle",
    }
}

pub fn handle_config_command(
    paths: &ReportPaths,
    settings: &Settings,
    storage: &Storage,
) -> ReportResult<()> {
    let settings_file = paths.settings_file();

    println!("rental-reports Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        settings_file.display(),
        if settings_file.exists() { "" } else { " (not found, using defaults)" }
    );
    println!(
        "Data source:      {} ({})",
        storage.source().path().display(),
        source_kind(storage.source())
    );
    println!();
    println!("Settings:");
    println!("  Default format:   {}", settings.default_format);
    println!(
        "  Currency symbol:  {}",
        if settings.currency_symbol.is_empty() {
            "(none)"
        } else {
            settings.currency_symbol.as_str()
        }
    );
    println!("  Null display:     {}", settings.null_display);
    Ok(())
}
