//! Thread-safe handle around a single ledger.
//!
//! `SharedLedger` serializes submissions with a per-ledger `Mutex`, so the
//! read-current/decide/write sequence of a submission is one atomic step. Ledgers are
//! independent; there is no cross-ledger locking.

use std::sync::{Arc, Mutex};

use quote_common::{Quote, Result};

use crate::ledger::{QuoteLedger, SubmitStatus};
use crate::observer::{LedgerObserver, LogObserver};
use crate::snapshot::LedgerSnapshot;

/// Cloneable handle to a ledger guarded by a mutex.
pub struct SharedLedger<O = LogObserver> {
    inner: Arc<Mutex<QuoteLedger<O>>>,
}

impl<O> Clone for SharedLedger<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O: LedgerObserver> SharedLedger<O> {
    /// Wrap an existing ledger.
    pub fn new(ledger: QuoteLedger<O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Submit a quote under the lock. Fails only if the lock is poisoned.
    pub fn submit_quote(&self, quote: impl Into<Arc<Quote>>) -> Result<SubmitStatus> {
        let mut ledger = self.inner.lock()?;
        Ok(ledger.submit_quote(quote))
    }

    /// Copy of the ledger state.
    pub fn snapshot(&self) -> Result<LedgerSnapshot> {
        Ok(self.inner.lock()?.snapshot())
    }

    /// Run `f` with read access to the ledger.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&QuoteLedger<O>) -> R) -> Result<R> {
        let ledger = self.inner.lock()?;
        Ok(f(&ledger))
    }
}
