//! Folioview CLI.
//!
//! ```bash
//! # Positions grouped by symbol, as text
//! folioview group -i data/accounts.json
//!
//! # Portfolio totals as JSON
//! folioview summary -i data/accounts.json -f json
//! ```

mod config;
mod main_lib;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use main_lib::{init_tracing, load_snapshot, render, Report};

#[derive(Parser)]
#[command(name = "folioview")]
#[command(about = "Brokerage positions grouped by ticker symbol", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot file written by the backend (overrides FV_SNAPSHOT_PATH)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output format (overrides FV_OUTPUT_FORMAT)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Positions of every account bucketed by symbol, with gains
    Group,

    /// Market value and cost totals across all accounts
    Summary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.input, cli.format);
    init_tracing(&config.log_format);

    let report = match cli.command {
        Commands::Group => Report::Group,
        Commands::Summary => Report::Summary,
    };

    let snapshot = load_snapshot(&config.snapshot_path)?;
    let output = render(report, &snapshot, config.output_format)?;
    print!("{}", output);
    Ok(())
}
