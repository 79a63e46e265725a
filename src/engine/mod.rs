//! Transfer engine
//!
//! The validate -> lock -> mutate protocol for moving funds between two
//! accounts. Deadlock freedom comes from a single process-wide lock order:
//! the lexicographically greater account id is always locked first, so no
//! two in-flight transfers can hold their two locks in opposite orders.

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::DomainError;
use crate::store::AccountStore;

/// Result of a committed transfer. Balances are the post-transfer values
/// captured inside the critical section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub from_balance: Decimal,
    pub to_balance: Decimal,
}

/// Executes single transfers against the shared account store.
///
/// The lock table maps each account id to one stable mutex, created on first
/// use and reused for the lifetime of the process. Locking anything derived
/// per-call (a transient id value, a freshly built mutex) would silently
/// defeat mutual exclusion, so handles are looked up here and never rebuilt.
pub struct TransferEngine {
    store: Arc<AccountStore>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl TransferEngine {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self {
            store,
            locks: DashMap::new(),
        }
    }

    /// The dedicated lock for an account id. The entry API makes the first
    /// insertion atomic: every caller, forever after, sees the same mutex.
    fn lock_handle(&self, id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Move `amount` from `from_id` to `to_id` as one atomic unit.
    ///
    /// Validation order is fixed: amount, same-account, source existence,
    /// destination existence. The balance check happens under both locks
    /// against freshly fetched accounts, since balances may have moved since
    /// validation. On any failure no balance changes.
    pub async fn transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(amount));
        }
        if from_id == to_id {
            return Err(DomainError::SameAccount);
        }
        if !self.store.contains(from_id) {
            return Err(DomainError::AccountNotFound(from_id.to_owned()));
        }
        if !self.store.contains(to_id) {
            return Err(DomainError::AccountNotFound(to_id.to_owned()));
        }

        let from_lock = self.lock_handle(from_id);
        let to_lock = self.lock_handle(to_id);

        // Same-account was rejected above, so the two ids are distinct and
        // the comparison picks a strict order: greater id first, regardless
        // of transfer direction.
        let (first, second) = if from_id > to_id {
            (from_lock, to_lock)
        } else {
            (to_lock, from_lock)
        };

        let _outer = first.lock().await;
        let _inner = second.lock().await;

        let from = self
            .store
            .get(from_id)
            .ok_or_else(|| DomainError::AccountNotFound(from_id.to_owned()))?;
        let to = self
            .store
            .get(to_id)
            .ok_or_else(|| DomainError::AccountNotFound(to_id.to_owned()))?;

        if from.balance < amount {
            return Err(DomainError::InsufficientBalance(from_id.to_owned()));
        }

        let from_balance = from.balance - amount;
        let to_balance = to.balance + amount;
        self.store.set_balance(from_id, from_balance)?;
        self.store.set_balance(to_id, to_balance)?;

        Ok(TransferOutcome {
            from_account_id: from_id.to_owned(),
            to_account_id: to_id.to_owned(),
            amount,
            from_balance,
            to_balance,
        })
    }
}
