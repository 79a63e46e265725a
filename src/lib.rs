//! fundflow Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod domain;
pub mod engine;
pub mod notify;
pub mod service;
pub mod store;

// Used by the main.rs binary as well
pub mod config;
mod error;

pub use config::Config;
pub use domain::{Account, DomainError};
pub use engine::{TransferEngine, TransferOutcome};
pub use error::{AppError, AppResult};
pub use notify::{LogNotifier, Notifier};
pub use service::TransferCoordinator;
pub use store::AccountStore;
