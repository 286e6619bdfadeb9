//! Command-line arguments for the quote ledger driver.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Asset identifier the ledger tracks.
    #[clap(long, default_value = "AAPL")]
    pub symbol: String,

    /// Currency the prices are quoted in.
    #[clap(long, default_value = "USD")]
    pub currency: String,

    /// Seed quote as `<rfc3339 timestamp>,<price>`. Defaults to the current time at 175.0.
    #[clap(long)]
    pub initial: Option<String>,

    /// Quote to submit as `<rfc3339 timestamp>,<price>`. Repeat to submit several, in order.
    #[clap(long = "quote")]
    pub quotes: Vec<String>,

    /// Number of random-walk quotes to submit after the explicit ones.
    #[clap(long, default_value_t = 0)]
    pub synthetic: usize,

    /// Seed for the synthetic feed, for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print the final ledger state as JSON on stdout.
    #[clap(long)]
    pub json: bool,
}
