//! Quote ledger for a single asset.
//!
//! - `ledger` — `QuoteLedger`, the current-quote slot plus append-only history, and the
//!   `SubmitStatus` returned by every submission.
//! - `observer` — hooks for reporting transitions (`LogObserver` by default).
//! - `shared` — `SharedLedger`, a mutex-guarded handle for multi-threaded callers.
//! - `snapshot` — serializable copy of the ledger state.
#![warn(missing_docs)]
pub mod ledger;
pub mod observer;
pub mod shared;
pub mod snapshot;

pub use ledger::{QuoteLedger, SubmitStatus};
pub use observer::{LedgerObserver, LogObserver, NoopObserver};
pub use shared::SharedLedger;
pub use snapshot::LedgerSnapshot;
