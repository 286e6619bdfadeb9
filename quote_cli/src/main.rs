//! Quote ledger driver — builds a single-asset ledger, replays quotes into it and reports
//! the outcome of every submission together with the final state.
//!
//! Usage example (CLI):
//! ```bash
//! quote_cli --initial 2024-01-10T12:00:00Z,175.0 \
//!     --quote 2024-01-10T13:00:00Z,-0.01 \
//!     --quote 2024-01-09T12:00:00Z,180.0 \
//!     --quote 2024-01-10T13:00:00Z,190.0 \
//!     --synthetic 20 --seed 42
//! ```
//!
//! Explicit `--quote` values are submitted first, in the order given, followed by
//! `--synthetic` random-walk quotes. Set `RUST_LOG=debug` to also see every promotion.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use chrono::Utc;
use clap::Parser;
use log::info;
use quote_common::{LedgerError, Quote, QuoteParser, Result};
use quote_ledger::{LedgerObserver, QuoteLedger, SubmitStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Seed price used when `--initial` is not given.
const DEFAULT_INITIAL_PRICE: f64 = 175.0;

fn main() -> Result<(), LedgerError> {
    init_logger();
    let args = Args::parse();

    let initial = match &args.initial {
        Some(text) => text.parse::<Quote>()?,
        None => Quote::new(Utc::now(), DEFAULT_INITIAL_PRICE),
    };
    let mut feed = Quote::parse_all(&args.quotes)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut last = feed.last().cloned().unwrap_or_else(|| initial.clone());
    for _ in 0..args.synthetic {
        last = last.next_after(&mut rng);
        feed.push(last.clone());
    }

    let mut ledger = QuoteLedger::new(args.symbol.trim(), initial, args.currency.trim());
    info!(
        "Ledger {} ({}) seeded with {}",
        ledger.symbol(),
        ledger.currency(),
        ledger.current()
    );

    let counts = replay(&mut ledger, feed);

    if args.json {
        println!("{}", ledger.snapshot().to_json_pretty()?);
    } else {
        report(&ledger, &counts);
    }
    Ok(())
}

/// Submits every quote in order and tallies the outcomes.
fn replay<O: LedgerObserver>(
    ledger: &mut QuoteLedger<O>,
    feed: Vec<Quote>,
) -> HashMap<SubmitStatus, usize> {
    let mut counts = HashMap::new();
    for quote in feed {
        let line = quote.to_string();
        let status = ledger.submit_quote(quote);
        info!("{}: {} -> {}", ledger.symbol(), line, status);
        *counts.entry(status).or_insert(0) += 1;
    }
    counts
}

fn report<O: LedgerObserver>(ledger: &QuoteLedger<O>, counts: &HashMap<SubmitStatus, usize>) {
    for status in SubmitStatus::iter() {
        info!("{}: {}", status, counts.get(&status).copied().unwrap_or(0));
    }
    info!("Current: {} {}", ledger.current(), ledger.currency());
    for (i, quote) in ledger.history().iter().enumerate() {
        info!("History[{}]: {}", i, quote);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
