//! Owned, serializable view of a ledger for reporting.

use quote_common::{Quote, Result};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a ledger's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Asset identifier.
    pub symbol: String,
    /// Quote currency.
    pub currency: String,
    /// Current quote at the time of the snapshot.
    pub current: Quote,
    /// History in arrival order, oldest first.
    pub history: Vec<Quote>,
}

impl LedgerSnapshot {
    /// Encode the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
