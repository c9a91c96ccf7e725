//! Orders HTTP service: a status endpoint and a `/healthz` probe that echoes
//! the service name.

pub mod routes;

use axum::Router;
use axum::routing::get;
use common::ServiceInfo;

pub const SERVICE_NAME: &str = "orders-api";
pub const DEFAULT_PORT: u16 = 8001;

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: SERVICE_NAME,
    version: env!("CARGO_PKG_VERSION"),
    default_port: DEFAULT_PORT,
};

/// Creates the route table.
pub fn create_app() -> Router {
    Router::new()
        .route("/healthz", get(routes::health::check))
        .route("/", get(routes::root::get))
}
