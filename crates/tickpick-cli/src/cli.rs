//! CLI argument definitions for tickpick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `movers` | Rank the top sector movers by magnitude of change |
//! | `performance` | Multi-horizon percent-change report for symbols |
//! | `recommend` | Run the full pipeline and print one trade recommendation |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--live` | `false` | Use the real brokerage API instead of the offline catalog |
//! | `--seed` | random | Seed for the allocator's random search |
//!
//! # Examples
//!
//! ```bash
//! # Top Energy movers, offline catalog
//! tickpick movers Energy
//!
//! # Performance report as a table, exported to CSV
//! tickpick performance AAPL MSFT --format table --out report.csv
//!
//! # Reproducible recommendation with an explicit budget
//! tickpick recommend "Information Technology" --tolerance high --budget 1000 --seed 7
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// tickpick - sector mover screener and trade recommender
///
/// Screens the brokerage's top movers by sector, classifies risk, and runs
/// a reward search to recommend a single trade.
#[derive(Debug, Parser)]
#[command(
    name = "tickpick",
    author,
    version,
    about = "Sector mover screener and trade recommender",
    long_about = "tickpick turns a sector name and a risk tolerance into one trade \
recommendation:\n\
\n\
  • Ranks the brokerage's top movers within a sector\n\
  • Classifies each mover into a low/medium/high risk tier\n\
  • Allocates a budget across candidates with a reward search\n\
  • Sizes the recommended amount into whole shares\n\
\n\
Runs against a deterministic offline catalog by default; pass --live to hit \
the real brokerage API (requires ROBINHOOD_TOKEN).\n\
\n\
Use 'tickpick <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Use the real brokerage API instead of the offline catalog.
    ///
    /// Reads the session token from the ROBINHOOD_TOKEN environment
    /// variable.
    #[arg(long, global = true, default_value_t = false)]
    pub live: bool,

    /// Seed for the allocator's random search.
    ///
    /// Runs with the same seed, inputs, and budget produce identical
    /// recommendations. Unseeded runs draw from system entropy.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank the top sector movers by magnitude of change.
    ///
    /// Filters the brokerage's broad movers list down to one sector and
    /// ranks the survivors by absolute percent change, capped at ten.
    ///
    /// # Examples
    ///
    ///   tickpick movers Energy
    ///   tickpick movers "Information Technology" --format table
    Movers(MoversArgs),

    /// Multi-horizon percent-change report for symbols.
    ///
    /// Reports day, week, month, and year percent changes alongside
    /// company facts for each symbol. Missing data renders as N/A.
    ///
    /// # Examples
    ///
    ///   tickpick performance AAPL MSFT
    ///   tickpick performance NVDA --format table --out report.csv
    Performance(PerformanceArgs),

    /// Run the full pipeline and print one trade recommendation.
    ///
    /// Screens the sector, keeps candidates at the requested risk
    /// tolerance, allocates the budget, and sizes the order. Nothing is
    /// submitted unless --execute is passed.
    ///
    /// # Examples
    ///
    ///   tickpick recommend Energy --tolerance high
    ///   tickpick recommend Financials --tolerance medium --budget 500 --seed 42
    Recommend(RecommendArgs),
}

/// Arguments for the `movers` command.
#[derive(Debug, Args)]
pub struct MoversArgs {
    /// Sector name, one of the twelve recognized sectors
    /// (e.g. Energy, "Information Technology").
    pub sector: String,
}

/// Arguments for the `performance` command.
#[derive(Debug, Args)]
pub struct PerformanceArgs {
    /// One or more market symbols.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Write the report to a CSV file in addition to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `recommend` command.
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Sector name, one of the twelve recognized sectors.
    pub sector: String,

    /// Risk tolerance tier; only movers in this tier become candidates.
    #[arg(long, default_value = "medium")]
    pub tolerance: String,

    /// Trade budget in whole dollars.
    ///
    /// Defaults to 20% of account cash when omitted.
    #[arg(long)]
    pub budget: Option<u32>,

    /// Number of search epochs the allocator runs.
    #[arg(long, default_value_t = 1_000)]
    pub epochs: u32,

    /// Submit the sized market order to the brokerage.
    ///
    /// Without this flag the order is computed and printed but never
    /// submitted.
    #[arg(long, default_value_t = false)]
    pub execute: bool,
}
