//! Outbound notification seam
//!
//! Successful transfers notify an external collaborator exactly once.
//! Delivery is fire-and-forget: it sits outside the consistency boundary,
//! and a transfer whose notification fails is still a committed transfer.

use async_trait::async_trait;

use crate::domain::Account;

/// External collaborator informed of successful transfers.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Inform the destination account holder about a movement. `account` is
    /// the destination's post-transfer state.
    async fn notify(&self, account: &Account, message: &str);
}

/// Production notifier: one structured log line per notification. Stands in
/// for a real delivery channel (email, push) behind the same trait.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, account: &Account, message: &str) {
        tracing::info!(
            account_id = %account.id,
            balance = %account.balance,
            notification = message,
            "Transfer notification"
        );
    }
}
