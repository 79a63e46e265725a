//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors.
///
/// Every failure here is a per-request outcome surfaced synchronously to the
/// caller with zero side effects. Nothing is retried internally and nothing
/// is process-fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Creation of an account id already present in the store
    #[error("Account id already exists: {0}")]
    DuplicateAccountId(String),

    /// Transfer amount not strictly positive
    #[error("Transfer amount must be greater than zero (got {0})")]
    InvalidAmount(Decimal),

    /// Source and destination identifiers are equal
    #[error("Cannot transfer to the same account")]
    SameAccount,

    /// Either endpoint of a transfer does not exist
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Source balance is less than the requested amount at mutation time
    #[error("Insufficient balance in account {0}")]
    InsufficientBalance(String),
}

impl DomainError {
    /// Check if this error means a referenced account does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}
