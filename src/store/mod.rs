//! Account store
//!
//! In-memory, process-lifetime ownership of every `Account` record. The
//! backing map supports concurrent create/read without any caller-side
//! locking; balance writes go through the crate-private mutator and are
//! serialized by the transfer engine's per-account locks.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::domain::{Account, DomainError};

/// Concurrent id -> Account map. No component other than the store may
/// construct or destroy a stored record; accounts are never deleted in
/// normal operation.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Account>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Insert a new account.
    ///
    /// Exactly one caller wins a concurrent create race on the same id (the
    /// map's entry insertion is atomic); every other caller gets
    /// `DuplicateAccountId`.
    pub fn create(&self, account: Account) -> Result<(), DomainError> {
        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::DuplicateAccountId(account.id)),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Read-only lookup. Never blocks on transfer locks; those live in the
    /// engine, not here.
    pub fn get(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    /// Existence check without cloning the record.
    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Overwrite a balance. Only the transfer engine calls this, inside its
    /// locked critical section.
    pub(crate) fn set_balance(&self, id: &str, balance: Decimal) -> Result<(), DomainError> {
        match self.accounts.get_mut(id) {
            Some(mut entry) => {
                entry.balance = balance;
                Ok(())
            }
            None => Err(DomainError::AccountNotFound(id.to_owned())),
        }
    }

    /// Remove every account. Test isolation only; production flows never
    /// call this.
    pub fn clear_all(&self) {
        self.accounts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_create_and_get() {
        let store = AccountStore::new();
        store.create(Account::new("A", dec!(1000))).unwrap();

        let account = store.get("A").unwrap();
        assert_eq!(account.id, "A");
        assert_eq!(account.balance, dec!(1000));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = AccountStore::new();
        assert!(store.get("missing").is_none());
        assert!(!store.contains("missing"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = AccountStore::new();
        store.create(Account::new("A", dec!(100))).unwrap();

        let result = store.create(Account::new("A", dec!(999)));
        assert_eq!(
            result,
            Err(DomainError::DuplicateAccountId("A".to_string()))
        );

        // The first create is the one that stuck.
        assert_eq!(store.get("A").unwrap().balance, dec!(100));
    }

    #[test]
    fn test_concurrent_create_has_one_winner() {
        let store = Arc::new(AccountStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.create(Account::new("contested", Decimal::from(i)))
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(wins, 1);
        assert!(store.contains("contested"));
    }

    #[test]
    fn test_set_balance_on_missing_account() {
        let store = AccountStore::new();
        let result = store.set_balance("ghost", dec!(10));
        assert_eq!(
            result,
            Err(DomainError::AccountNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_clear_all() {
        let store = AccountStore::new();
        store.create(Account::new("A", dec!(1))).unwrap();
        store.create(Account::new("B", dec!(2))).unwrap();

        store.clear_all();

        assert!(store.get("A").is_none());
        assert!(store.get("B").is_none());
    }
}
