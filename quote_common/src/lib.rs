//!
//! Common types shared by the quote ledger and its command-line driver.
//!
//! This crate aggregates:
//! - `quote` — the `Quote` value type and parsing helpers.
//! - `error` — business-rule rejections (`QuoteRejection`) and the unified
//!   infrastructure error `LedgerError`.
//! - `result` — handy `Result<T, LedgerError>` alias.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod result;

pub use error::{LedgerError, QuoteRejection};
pub use quote::{Quote, QuoteParser};
pub use result::Result;
