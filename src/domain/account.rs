//! Account record
//!
//! The one record this system keeps: an identifier plus a decimal balance.
//! Records are owned exclusively by the `AccountStore`; balances change only
//! through the transfer engine's locked protocol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary account.
///
/// # Invariants
/// - `id` is immutable after creation and unique within the store.
/// - `balance >= 0` at every point observable outside an in-flight transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub balance: Decimal,
}

impl Account {
    /// Create an account record with an opening balance.
    pub fn new(id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }
}
