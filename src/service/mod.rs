//! Transfer coordination
//!
//! Thin orchestration over the store and engine: the surface the HTTP layer
//! talks to. Failures propagate unchanged; only a committed transfer reaches
//! the notifier, and the notifier's outcome never affects the result.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{Account, DomainError};
use crate::engine::{TransferEngine, TransferOutcome};
use crate::notify::Notifier;
use crate::store::AccountStore;

/// Orchestrates account CRUD and transfers.
pub struct TransferCoordinator {
    store: Arc<AccountStore>,
    engine: TransferEngine,
    notifier: Arc<dyn Notifier>,
}

impl TransferCoordinator {
    pub fn new(store: Arc<AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        let engine = TransferEngine::new(store.clone());
        Self {
            store,
            engine,
            notifier,
        }
    }

    pub fn create_account(&self, account: Account) -> Result<(), DomainError> {
        self.store.create(account)
    }

    pub fn get_account(&self, id: &str) -> Option<Account> {
        self.store.get(id)
    }

    /// Run the transfer protocol, then notify the destination once.
    ///
    /// The transfer has already committed by the time the notifier runs, so
    /// nothing downstream of it can roll the movement back.
    pub async fn initiate_transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, DomainError> {
        let outcome = self.engine.transfer(from_id, to_id, amount).await?;

        let destination = Account::new(outcome.to_account_id.clone(), outcome.to_balance);
        let message = format!(
            "Amount {} transferred from {} to {}",
            outcome.amount, outcome.from_account_id, outcome.to_account_id
        );
        self.notifier.notify(&destination, &message).await;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Captures every notification for assertions.
    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(Account, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, account: &Account, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((account.clone(), message.to_string()));
        }
    }

    fn coordinator_with(
        accounts: &[(&str, Decimal)],
    ) -> (TransferCoordinator, Arc<RecordingNotifier>) {
        let store = Arc::new(AccountStore::new());
        for (id, balance) in accounts {
            store.create(Account::new(*id, *balance)).unwrap();
        }
        let notifier = Arc::new(RecordingNotifier::default());
        let coordinator = TransferCoordinator::new(store, notifier.clone());
        (coordinator, notifier)
    }

    #[tokio::test]
    async fn test_successful_transfer_notifies_destination_once() {
        let (coordinator, notifier) = coordinator_with(&[("A", dec!(200)), ("B", dec!(200))]);

        coordinator.initiate_transfer("A", "B", dec!(20)).await.unwrap();

        let calls = notifier.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);

        let (account, message) = &calls[0];
        assert_eq!(account.id, "B");
        assert_eq!(account.balance, dec!(220));
        assert_eq!(message, "Amount 20 transferred from A to B");
    }

    #[tokio::test]
    async fn test_failed_transfer_never_notifies() {
        let (coordinator, notifier) = coordinator_with(&[("A", dec!(50)), ("B", dec!(50))]);

        let result = coordinator.initiate_transfer("A", "B", dec!(100)).await;
        assert_eq!(
            result,
            Err(DomainError::InsufficientBalance("A".to_string()))
        );

        assert!(notifier.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_account() {
        let (coordinator, _notifier) = coordinator_with(&[]);

        coordinator.create_account(Account::new("A", dec!(1000))).unwrap();
        assert_eq!(coordinator.get_account("A").unwrap().balance, dec!(1000));

        let duplicate = coordinator.create_account(Account::new("A", dec!(5)));
        assert_eq!(
            duplicate,
            Err(DomainError::DuplicateAccountId("A".to_string()))
        );
    }
}
