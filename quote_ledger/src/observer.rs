//! Diagnostic hooks invoked by a ledger after each submission.
//!
//! A ledger never prints on its own. Whatever should happen when a quote is promoted or
//! turned away (logging, counting, alerting) is supplied as a `LedgerObserver`.
//!
//! - `LogObserver` — default; writes through the `log` facade.
//! - `NoopObserver` — discards everything.

use std::sync::Arc;

use log::{debug, info, warn};
use quote_common::{Quote, QuoteRejection};

/// Receives notifications about ledger transitions.
///
/// Both hooks run after the ledger state has been updated. Default bodies do nothing, so
/// implementors only override what they care about.
pub trait LedgerObserver: Send {
    /// `current` was promoted and `previous` moved to history.
    fn on_accepted(&self, _symbol: &str, _previous: &Quote, _current: &Quote) {}

    /// A quote was not promoted. For `EarlierQuoteDate` it has already been filed to history.
    fn on_rejected(&self, _symbol: &str, _rejection: &QuoteRejection) {}
}

/// Observer that reports transitions through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LedgerObserver for LogObserver {
    fn on_accepted(&self, symbol: &str, previous: &Quote, current: &Quote) {
        debug!("{}: {} replaced {}", symbol, current, previous);
    }

    fn on_rejected(&self, symbol: &str, rejection: &QuoteRejection) {
        match rejection {
            QuoteRejection::NegativePrice { .. } => {
                warn!("{}: {}", symbol, rejection);
                warn!("{}: Quote has not been updated", symbol);
            }
            QuoteRejection::EarlierQuoteDate { .. } => {
                info!("{}: {}; filed to history", symbol, rejection);
            }
        }
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LedgerObserver for NoopObserver {}

impl<O: LedgerObserver + Sync> LedgerObserver for Arc<O> {
    fn on_accepted(&self, symbol: &str, previous: &Quote, current: &Quote) {
        (**self).on_accepted(symbol, previous, current)
    }

    fn on_rejected(&self, symbol: &str, rejection: &QuoteRejection) {
        (**self).on_rejected(symbol, rejection)
    }
}
