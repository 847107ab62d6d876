//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Input poll and animation tick, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate_ms: Option<u64>,

    /// Skip the confetti when someone wins
    #[arg(long)]
    pub no_confetti: bool,
}
