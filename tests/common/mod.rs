//! Shared test helpers

use std::sync::Arc;

use axum::Router;
use fundflow::api;
use fundflow::{AccountStore, LogNotifier, TransferCoordinator};

/// Fresh in-memory application per test, so no state leaks between tests.
pub fn test_app() -> Router {
    let store = Arc::new(AccountStore::new());
    let coordinator = Arc::new(TransferCoordinator::new(store, Arc::new(LogNotifier)));
    api::create_router().with_state(coordinator)
}
