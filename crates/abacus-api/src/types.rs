//! JSON request and response bodies for the Abacus API.

use abacus_types::Number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operands for any of the four operations.
///
/// Only used to document the request body; requests are validated field by
/// field through `Operands` so that missing and non-numeric values are
/// reported separately.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationRequest {
    /// First operand (dividend for division)
    #[schema(example = 10)]
    pub a: f64,

    /// Second operand (divisor for division)
    #[schema(example = 5)]
    pub b: f64,
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    /// Integer when both operands were integers (except for division),
    /// float otherwise
    #[schema(value_type = f64, example = 15)]
    pub result: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
