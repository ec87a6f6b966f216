use abacus_types::{OperandPair, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::ApiError;

/// Request body extractor that validates `{"a": <number>, "b": <number>}`
/// before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct Operands(pub OperandPair);

impl<S> FromRequest<S> for Operands
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        Ok(Self(OperandPair::from_json(&body)?))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
        status if status.is_server_error() => ApiError::internal(rejection.body_text()),
        _ => ValidationError::malformed_body(rejection.body_text()).into(),
    }
}
