//! Liveness probe.

use axum::Json;
use common::{HealthReport, HealthStatus};

use crate::SERVICE_NAME;

/// GET /healthz — returns `ok` together with the service name.
pub async fn check() -> Json<HealthReport> {
    Json(HealthReport::for_service(HealthStatus::Ok, SERVICE_NAME))
}
