//! Error types for the completion gateway
//!
//! Every failure on the `/complete` path ends up as one of three variants,
//! each with its own status code and a flat `{ "error": message }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::proxy::ProviderError;

/// Message returned when the request carries no usable prompt
pub const MISSING_INPUT_MESSAGE: &str = "prompt required";

/// Message returned when the provider reply does not have the expected shape
pub const CONTRACT_VIOLATION_MESSAGE: &str = "Invalid response structure from OpenAI";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Prompt absent, empty, or not a string. Raised before any upstream call.
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    /// The provider answered, but the reply is not a usable completion
    #[error("{}", CONTRACT_VIOLATION_MESSAGE)]
    ProviderContractViolation,

    /// The provider call itself failed (network, timeout, auth, upstream 5xx)
    #[error("{0}")]
    ProviderCallFailure(String),
}

impl AppError {
    /// Label used for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            AppError::MissingInput => "missing_input",
            AppError::ProviderContractViolation => "contract_violation",
            AppError::ProviderCallFailure(_) => "provider_failure",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput => StatusCode::BAD_REQUEST,
            AppError::ProviderContractViolation => StatusCode::BAD_GATEWAY,
            AppError::ProviderCallFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::ProviderCallFailure(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "prompt required")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
