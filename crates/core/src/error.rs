//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is terminal for the operation that produced it: the registry
/// is left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Input failed validation (missing name, bad amount).
    #[error("{0}")]
    Validation(String),

    /// No live account has the requested number.
    #[error("Account not found")]
    NotFound,

    /// A withdrawal asked for more than the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Account number generation gave up after too many collisions.
    #[error("could not allocate a free account number after {0} attempts")]
    NumberSpaceExhausted(u32),
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::NumberSpaceExhausted(_))
    }
}
