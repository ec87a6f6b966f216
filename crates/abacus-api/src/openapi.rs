use utoipa::OpenApi;

use crate::error::{ErrorResponse, FieldErrorDetail};
use crate::handlers;
use crate::types::{CalculationRequest, CalculationResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::health
    ),
    components(schemas(
        CalculationRequest,
        CalculationResponse,
        HealthResponse,
        ErrorResponse,
        FieldErrorDetail
    )),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;
