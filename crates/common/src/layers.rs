//! Middleware stack wrapped around every service router.

use axum::Router;
use axum::middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::metrics::track_requests;

/// Wraps a route table with request metrics, permissive CORS and HTTP
/// tracing. Adds no routes of its own.
pub fn with_observability(router: Router) -> Router {
    router
        .layer(middleware::from_fn(track_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
