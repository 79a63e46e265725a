//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Server errors (5xx)
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            // Domain errors - map to appropriate HTTP status
            AppError::Domain(ref domain_err) => {
                use crate::domain::DomainError;
                match domain_err {
                    DomainError::DuplicateAccountId(id) => {
                        (StatusCode::CONFLICT, "duplicate_account_id", Some(id.clone()))
                    }
                    DomainError::InvalidAmount(_) => (
                        StatusCode::BAD_REQUEST,
                        "invalid_amount",
                        Some(domain_err.to_string()),
                    ),
                    DomainError::SameAccount => {
                        (StatusCode::BAD_REQUEST, "same_account_transfer", None)
                    }
                    DomainError::AccountNotFound(id) => {
                        (StatusCode::NOT_FOUND, "account_not_found", Some(id.clone()))
                    }
                    DomainError::InsufficientBalance(id) => (
                        StatusCode::BAD_REQUEST,
                        "insufficient_balance",
                        Some(id.clone()),
                    ),
                }
            }

            // 500 Internal Server Error
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (
                AppError::from(DomainError::DuplicateAccountId("A".into())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::from(DomainError::InvalidAmount(dec!(-1))),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(DomainError::SameAccount),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(DomainError::AccountNotFound("A".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(DomainError::InsufficientBalance("A".into())),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
