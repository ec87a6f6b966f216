use abacus_calculator::{CalculationError, Calculator, OperandPair, Operation};
use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::pages::{INVALID_INPUT_MESSAGE, IndexTemplate, Outcome};

/// Fields posted by the calculator form. Everything is optional so that a
/// half-filled form still gets a rendered answer instead of a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateForm {
    pub a: Option<String>,
    pub b: Option<String>,
    pub operation: Option<String>,
}

/// Routes for the interactive page.
pub fn router(calculator: Calculator) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .with_state(calculator)
}

async fn index() -> Response {
    render(StatusCode::OK, &IndexTemplate::default())
}

async fn calculate(
    State(calculator): State<Calculator>,
    Form(form): Form<CalculateForm>,
) -> Response {
    let page = IndexTemplate::with_inputs(
        form.a.clone().unwrap_or_default(),
        form.b.clone().unwrap_or_default(),
    );

    let operation = match form.operation.as_deref().unwrap_or_default().parse::<Operation>() {
        Ok(op) => op,
        Err(err) => {
            debug!(%err, "form submitted without a usable operation");
            let page = page.showing(Outcome::Failure(err.to_string()));
            return render(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let operands = match OperandPair::from_text(form.a.as_deref(), form.b.as_deref()) {
        Ok(operands) => operands,
        Err(err) => {
            debug!(%err, operation = operation.name(), "form operands rejected");
            let page = page.showing(Outcome::Failure(INVALID_INPUT_MESSAGE.to_string()));
            return render(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let result = calculator.calculate(operation, &operands);
    let status = match result {
        Ok(_) => StatusCode::OK,
        Err(CalculationError::DivisionByZero) => StatusCode::BAD_REQUEST,
        Err(CalculationError::Overflow) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    render(status, &page.showing(result))
}

fn render(status: StatusCode, page: &IndexTemplate) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(%err, "failed to render calculator page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
