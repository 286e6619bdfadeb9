//! Single-asset quote ledger.
//!
//! A `QuoteLedger` keeps exactly one current quote for an asset plus an append-only
//! history of quotes that were superseded or arrived out of order. Every quote offered
//! through [`QuoteLedger::submit_quote`] ends in exactly one of three outcomes:
//!
//! - negative price: nothing changes, `SubmitStatus::RejectedNegativePrice`;
//! - dated before the current quote: filed to history, current untouched,
//!   `SubmitStatus::FiledStale`;
//! - anything else: the old current moves to history and the new quote takes its place,
//!   `SubmitStatus::Accepted`.
//!
//! Rejections are reported to the ledger's `LedgerObserver` and through the returned
//! status; they never surface as errors.

use std::sync::Arc;

use quote_common::{Quote, QuoteRejection};
use strum_macros::{Display, EnumIter};

use crate::observer::{LedgerObserver, LogObserver};
use crate::snapshot::LedgerSnapshot;

/// Outcome of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SubmitStatus {
    /// The quote became current; the previous current was archived.
    Accepted,
    /// The quote had a negative price and was discarded.
    RejectedNegativePrice,
    /// The quote predates the current one and was only recorded in history.
    FiledStale,
}

impl SubmitStatus {
    /// True when the submitted quote is now the ledger's current quote.
    pub fn is_accepted(self) -> bool {
        matches!(self, SubmitStatus::Accepted)
    }
}

/// Current quote and history for one asset.
pub struct QuoteLedger<O = LogObserver> {
    symbol: String,
    currency: String,
    current: Arc<Quote>,
    /// Arrival order, oldest first. Only ever pushed to.
    history: Vec<Arc<Quote>>,
    observer: O,
}

impl QuoteLedger<LogObserver> {
    /// Create a ledger seeded with `initial` as its current quote.
    ///
    /// The seed is trusted and not validated. Transitions are logged via `LogObserver`.
    pub fn new(
        symbol: impl Into<String>,
        initial: impl Into<Arc<Quote>>,
        currency: impl Into<String>,
    ) -> Self {
        Self::with_observer(symbol, initial, currency, LogObserver)
    }
}

impl<O: LedgerObserver> QuoteLedger<O> {
    /// Create a ledger that reports transitions to `observer`.
    pub fn with_observer(
        symbol: impl Into<String>,
        initial: impl Into<Arc<Quote>>,
        currency: impl Into<String>,
        observer: O,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            currency: currency.into(),
            current: initial.into(),
            history: Vec::new(),
            observer,
        }
    }

    /// Asset identifier.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Currency the prices are quoted in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The most recently accepted quote.
    pub fn current(&self) -> &Arc<Quote> {
        &self.current
    }

    /// Superseded and stale quotes in arrival order, oldest first.
    pub fn history(&self) -> &[Arc<Quote>] {
        &self.history
    }

    /// Run both validation rules against `quote` without touching the ledger.
    pub fn check_quote(&self, quote: &Quote) -> Result<(), QuoteRejection> {
        if quote.price < 0.0 {
            return Err(QuoteRejection::NegativePrice {
                quote: quote.clone(),
            });
        }
        if quote.timestamp < self.current.timestamp {
            return Err(QuoteRejection::EarlierQuoteDate {
                attempted: quote.timestamp,
                current: self.current.timestamp,
            });
        }
        Ok(())
    }

    /// Offer a quote to the ledger and report what happened to it.
    pub fn submit_quote(&mut self, quote: impl Into<Arc<Quote>>) -> SubmitStatus {
        let quote = quote.into();

        match self.check_quote(&quote) {
            Ok(()) => {
                let previous = std::mem::replace(&mut self.current, quote);
                self.history.push(Arc::clone(&previous));
                self.observer
                    .on_accepted(&self.symbol, &previous, &self.current);
                SubmitStatus::Accepted
            }
            Err(rejection @ QuoteRejection::NegativePrice { .. }) => {
                self.observer.on_rejected(&self.symbol, &rejection);
                SubmitStatus::RejectedNegativePrice
            }
            Err(rejection @ QuoteRejection::EarlierQuoteDate { .. }) => {
                self.history.push(quote);
                self.observer.on_rejected(&self.symbol, &rejection);
                SubmitStatus::FiledStale
            }
        }
    }

    /// Owned copy of the ledger state for reporting.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            symbol: self.symbol.clone(),
            currency: self.currency.clone(),
            current: Quote::clone(&self.current),
            history: self.history.iter().map(|q| (**q).clone()).collect(),
        }
    }
}
