//! CLI command definitions.

pub mod calendar;
pub mod export;
pub mod selection;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the holiday calendar API.
#[derive(Debug, Parser)]
#[command(name = "holidays")]
#[command(about = "Browse and export public and school holidays", long_about = None)]
pub struct Cli {
    /// Holiday API base URL.
    #[arg(long, env = "HOLIDAYS_URL")]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all countries.
    Countries,
    /// List the subdivisions of a country.
    Subdivisions {
        /// Country ISO code, e.g. DE.
        country: String,
    },
    /// List the holidays of a selection.
    Holidays(selection::SelectionArgs),
    /// Show one month of holidays.
    Calendar(calendar::CalendarArgs),
    /// Export the 2024 holidays of a selection.
    Export(export::ExportArgs),
    /// Interactive holiday page.
    Browse,
}
