//! Quote data model and parsing helpers.
//!
//! A `Quote` is a single price observation for an asset: a UTC timestamp and a price.
//! It performs no validation on construction; whether a quote is acceptable is decided
//! only when it is offered to a ledger.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Price observation for a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Time of the observation.
    pub timestamp: DateTime<Utc>,
    /// Observed price. May be negative here; ledgers reject it.
    pub price: f64,
}

impl Quote {
    /// Create a new quote.
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Calculate the next synthetic price using a small random walk around `current_price`.
    ///
    /// The change is sampled uniformly from `[-1%, +1%]` and the result is clamped to a
    /// minimum positive value.
    pub fn next_price<R: Rng>(rng: &mut R, current_price: f64) -> f64 {
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }

    /// Generate the next synthetic quote after this one.
    ///
    /// The timestamp moves by a random step in `[-30s, 120s)`, so roughly one quote in
    /// five lands before its predecessor.
    pub fn next_after<R: Rng>(&self, rng: &mut R) -> Quote {
        let step = Duration::seconds(rng.random_range(-30..120));
        Quote {
            timestamp: self.timestamp + step,
            price: Self::next_price(rng, self.price),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(date={}, price={})",
            self.timestamp.to_rfc3339(),
            self.price
        )
    }
}

impl FromStr for Quote {
    type Err = LedgerError;

    /// Parses `"<rfc3339 timestamp>,<price>"`, e.g. `2024-01-10T12:00:00Z,175.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ts, price) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| LedgerError::ParseQuote(format!("{s:?}: expected <timestamp>,<price>")))?;

        let timestamp = DateTime::parse_from_rfc3339(ts.trim())
            .map_err(|e| LedgerError::ParseQuote(format!("{s:?}: bad timestamp: {e}")))?
            .with_timezone(&Utc);
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|e| LedgerError::ParseQuote(format!("{s:?}: bad price: {e}")))?;

        Ok(Quote { timestamp, price })
    }
}

/// Trait providing list parsing for quotes.
pub trait QuoteParser {
    /// Parses every entry as a `Quote`, failing on the first malformed one.
    fn parse_all<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Quote>, LedgerError>;
}

impl QuoteParser for Quote {
    fn parse_all<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Self>, LedgerError> {
        entries.iter().map(|s| s.as_ref().parse::<Self>()).collect()
    }
}
