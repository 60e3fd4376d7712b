//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + registry/collection wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses
//! - `extract.rs`: body/path extractors with JSON rejections

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router over fresh in-memory stores.
pub fn build_app() -> Router {
    build_app_with(services::build_services())
}

/// Build the router over caller-supplied services (tests, alternative stores).
pub fn build_app_with(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_context))
                .layer(Extension(Arc::new(services))),
        )
}
