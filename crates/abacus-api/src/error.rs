//! Error handling for the Abacus API
//!
//! Every failure is an `ApiError`, which maps to an HTTP status code and a
//! JSON body. All bodies carry an `error` string and a machine-readable
//! `code`, and never a `result` field, so callers can tell success from
//! failure by shape alone.

use abacus_calculator::CalculationError;
use abacus_types::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Message used for every validation failure; field detail goes in `detail`.
pub const VALIDATION_MESSAGE: &str = "Invalid request payload";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or non-numeric operands, or an undecodable body (422)
    #[error("Invalid request payload")]
    Validation(#[from] ValidationError),

    /// Failure inside an operation (400 for division by zero, 422 for overflow)
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Request body over the configured limit (413)
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Anything else (500)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Calculation(CalculationError::DivisionByZero) => StatusCode::BAD_REQUEST,
            ApiError::Calculation(CalculationError::Overflow) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Calculation(CalculationError::DivisionByZero) => "DIVISION_BY_ZERO",
            ApiError::Calculation(CalculationError::Overflow) => "OVERFLOW",
            ApiError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to ErrorResponse format for JSON serialization
    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::Validation(err) => Some(
                err.issues
                    .iter()
                    .map(|issue| FieldErrorDetail {
                        field: issue.field.to_string(),
                        message: issue.kind.message().to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        };

        ErrorResponse { error: self.to_string(), code: self.error_code().to_string(), detail }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Cannot divide by zero!")]
    pub error: String,

    /// Error code
    #[schema(example = "DIVISION_BY_ZERO")]
    pub code: String,

    /// Field-level problems, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<FieldErrorDetail>>,
}

/// One invalid input field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDetail {
    #[schema(example = "b")]
    pub field: String,
    #[schema(example = "field required")]
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, code = self.error_code(), "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
