//! API Routes
//!
//! HTTP endpoint definitions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, DomainError};
use crate::error::AppError;
use crate::service::TransferCoordinator;

/// Shared application state handed to every handler.
pub type AppState = Arc<TransferCoordinator>;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub account_id: String,
    #[serde(default)]
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: String,
    pub balance: Decimal,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            balance: account.balance,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferResponse {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub from_balance: Decimal,
    pub to_balance: Decimal,
    pub status: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:account_id", get(get_account))
        .route("/transfers", post(transfer))
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Create a new account with an opening balance
async fn create_account(
    State(coordinator): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    // Opening balances are set administratively at creation; a negative one
    // would break the balance invariant before any transfer runs.
    if request.balance < Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Opening balance must not be negative".to_string(),
        ));
    }

    let account = Account::new(request.account_id, request.balance);
    coordinator.create_account(account.clone())?;

    tracing::info!(account_id = %account.id, "Created account");

    Ok((StatusCode::CREATED, Json(account.into())))
}

// =========================================================================
// GET /accounts/:account_id
// =========================================================================

/// Get account by ID
async fn get_account(
    State(coordinator): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = coordinator
        .get_account(&account_id)
        .ok_or(DomainError::AccountNotFound(account_id))?;

    Ok(Json(account.into()))
}

// =========================================================================
// POST /transfers
// =========================================================================

/// Move funds between two accounts
async fn transfer(
    State(coordinator): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, AppError> {
    let outcome = coordinator
        .initiate_transfer(
            &request.from_account_id,
            &request.to_account_id,
            request.amount,
        )
        .await?;

    Ok(Json(TransferResponse {
        from_account_id: outcome.from_account_id,
        to_account_id: outcome.to_account_id,
        amount: outcome.amount,
        from_balance: outcome.from_balance,
        to_balance: outcome.to_balance,
        status: "completed".to_string(),
    }))
}
