//! HTTP handlers for the programmatic boundary.

use abacus_calculator::{OperandPair, Operation};
use axum::{Json, extract::State};
use chrono::Utc;
use utoipa::OpenApi;

use crate::AppState;
use crate::error::ApiResult;
use crate::extract::Operands;
use crate::openapi::ApiDoc;
use crate::types::{CalculationResponse, HealthResponse};

fn evaluate(
    state: &AppState,
    operation: Operation,
    operands: &OperandPair,
) -> ApiResult<Json<CalculationResponse>> {
    let result = state.calculator.calculate(operation, operands)?;
    Ok(Json(CalculationResponse { result }))
}

/// Add two numbers
#[utoipa::path(
    post,
    path = "/add",
    tag = "calculator",
    request_body = crate::types::CalculationRequest,
    responses(
        (status = 200, description = "Sum of a and b", body = CalculationResponse),
        (
            status = 422,
            description = "Missing or non-numeric operand",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn add(
    State(state): State<AppState>,
    Operands(operands): Operands,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate(&state, Operation::Add, &operands)
}

/// Subtract b from a
#[utoipa::path(
    post,
    path = "/subtract",
    tag = "calculator",
    request_body = crate::types::CalculationRequest,
    responses(
        (status = 200, description = "Difference a - b", body = CalculationResponse),
        (
            status = 422,
            description = "Missing or non-numeric operand",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn subtract(
    State(state): State<AppState>,
    Operands(operands): Operands,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate(&state, Operation::Subtract, &operands)
}

/// Multiply two numbers
#[utoipa::path(
    post,
    path = "/multiply",
    tag = "calculator",
    request_body = crate::types::CalculationRequest,
    responses(
        (status = 200, description = "Product of a and b", body = CalculationResponse),
        (
            status = 422,
            description = "Missing or non-numeric operand, or overflow",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn multiply(
    State(state): State<AppState>,
    Operands(operands): Operands,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate(&state, Operation::Multiply, &operands)
}

/// Divide a by b; the result is always a float
#[utoipa::path(
    post,
    path = "/divide",
    tag = "calculator",
    request_body = crate::types::CalculationRequest,
    responses(
        (status = 200, description = "Quotient a / b", body = CalculationResponse),
        (status = 400, description = "Cannot divide by zero!", body = crate::error::ErrorResponse),
        (
            status = 422,
            description = "Missing or non-numeric operand, or overflow",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn divide(
    State(state): State<AppState>,
    Operands(operands): Operands,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate(&state, Operation::Divide, &operands)
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
