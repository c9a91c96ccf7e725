//! Demo HTTP service.
//!
//! Answers `GET /` with a welcome message and `GET /health` with a health
//! status for orchestration probes. Every other path is left to axum's
//! default 404.

pub mod routes;

use axum::Router;
use axum::routing::get;
use common::ServiceInfo;

pub const SERVICE_NAME: &str = "demo-api";
pub const DEFAULT_PORT: u16 = 8000;

/// Static identity handed to the shared startup sequence.
pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: SERVICE_NAME,
    version: env!("CARGO_PKG_VERSION"),
    default_port: DEFAULT_PORT,
};

/// Creates the route table. Built once at startup and never mutated.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::get))
        .route("/health", get(routes::health::check))
}
