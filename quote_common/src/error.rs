//! Error types shared by the ledger and its drivers.
//!
//! Two families live here:
//! - `QuoteRejection` — business-rule outcomes of offering a quote to a ledger. These are
//!   expected conditions; the ledger reports them and keeps going.
//! - `LedgerError` — infrastructure failures (bad input text, JSON encoding, poisoned
//!   locks) that callers propagate with `?`.
use std::sync::PoisonError;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::quote::Quote;

/// Reason a submitted quote was not promoted to current.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteRejection {
    /// The quote carries a negative price. Nothing was recorded.
    #[error("Negative Price Exception for {quote}")]
    NegativePrice {
        /// The offending quote.
        quote: Quote,
    },

    /// The quote is dated before the ledger's current quote. It was filed to history.
    #[error(
        "Earlier Quote Date Exception: new quote date {} is before current last quote date {}",
        .attempted.to_rfc3339(),
        .current.to_rfc3339()
    )]
    EarlierQuoteDate {
        /// Timestamp of the submitted quote.
        attempted: DateTime<Utc>,
        /// Timestamp of the current quote at submission time.
        current: DateTime<Utc>,
    },
}

/// Unified infrastructure error type for the workspace.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A quote string could not be parsed; carries the input and the reason.
    #[error("Parse quote error: {0}")]
    ParseQuote(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for LedgerError {
    fn from(err: PoisonError<T>) -> Self {
        LedgerError::MutexLock(err.to_string())
    }
}
