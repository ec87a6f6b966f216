//! Abacus arithmetic service
//!
//! HTTP front door for the Abacus calculator: JSON endpoints for the four
//! operations, the interactive page from `abacus-web`, health and OpenAPI
//! documents, plus the configuration, logging and CLI plumbing used by the
//! `abacus` binary.

use std::time::Duration;

use abacus_calculator::Calculator;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod tracing_setup;
pub mod types;

use config::{AbacusConfig, LimitsConfig};

/// Shared, read-only application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: Calculator,
    pub start_time: DateTime<Utc>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            start_time: Utc::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

/// Builds the full application router: JSON endpoints, the interactive
/// page, and the transport layers configured in `config.limits`.
pub fn create_app(config: &AbacusConfig) -> Router {
    let state = AppState::new();
    info!(
        max_body_size_kb = config.limits.max_body_size_kb,
        request_timeout_seconds = config.limits.request_timeout_seconds,
        "Building application router"
    );

    let api = Router::new()
        .route("/add", post(handlers::add))
        .route("/subtract", post(handlers::subtract))
        .route("/multiply", post(handlers::multiply))
        .route("/divide", post(handlers::divide))
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .with_state(state.clone());

    with_transport_layers(api.merge(abacus_web::router(state.calculator)), &config.limits)
}

/// Wraps a router in the transport stack configured by `limits`. The timeout
/// sits innermost, directly around the routes.
pub fn with_transport_layers(router: Router, limits: &LimitsConfig) -> Router {
    let max_body = limits.max_body_size_bytes();
    router.layer(DefaultBodyLimit::max(max_body)).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(RequestBodyLimitLayer::new(max_body))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                limits.request_timeout(),
            )),
    )
}
