use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use rental_reports::cli::{
    handle_all_command, handle_config_command, handle_list_command, handle_report_command,
    handle_status_command,
};
use rental_reports::config::{OutputFormat, ReportPaths, Settings};
use rental_reports::reports::ReportKind;
use rental_reports::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "RENTAL_REPORTS_LOG";

#[derive(Parser)]
#[command(
    name = "rental-reports",
    version,
    about = "Read-only reports over a DVD rental store database",
    long_about = "rental-reports reads the tables of a DVD rental store (stores, staff, \
                  inventory, customers, rentals, payments, partners and actor awards) \
                  and prints the standard management reports as tables, CSV, JSON or YAML."
)]
struct Cli {
    /// Data directory or bundle file (overrides settings)
    #[arg(short, long, global = true, env = "RENTAL_REPORTS_SOURCE")]
    source: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one report
    Report {
        /// Report name (see `list`)
        kind: ReportKind,

        /// Output format: table, csv, json or yaml
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run every report from one snapshot
    All {
        /// Output format: table, csv, json or yaml
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available reports
    #[command(alias = "ls")]
    List,

    /// Show row counts for every table
    Status,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let source = cli
        .source
        .unwrap_or_else(|| settings.resolve_data_source(&paths));
    let storage = Storage::open(source);

    match cli.command {
        Some(Commands::Report { kind, format, output }) => {
            handle_report_command(&storage, &settings, kind, format, output)?;
        }
        Some(Commands::All { format, output }) => {
            handle_all_command(&storage, &settings, format, output)?;
        }
        Some(Commands::List) => handle_list_command()?,
        Some(Commands::Status) => handle_status_command(&storage)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings, &storage)?,
        None => {
            println!("rental-reports - DVD rental store reporting");
            println!();
            println!("Run 'rental-reports --help' for usage information.");
            println!("Run 'rental-reports list' to see available reports.");
        }
    }

    Ok(())
}
