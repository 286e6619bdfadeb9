//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `LedgerError`, so functions can simply return `Result<T>`.
use crate::error::LedgerError;

/// Workspace-wide `Result` alias with `LedgerError` as the default error.
pub type Result<T, E = LedgerError> = std::result::Result<T, E>;
