//! Health check endpoint.

use axum::Json;
use common::{HealthReport, HealthStatus};

/// GET /health — returns service health status.
pub async fn check() -> Json<HealthReport> {
    Json(HealthReport::new(HealthStatus::Healthy))
}
