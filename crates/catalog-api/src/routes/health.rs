use axum::Json;
use common::{HealthReport, HealthStatus};

use crate::SERVICE_NAME;

/// GET /healthz
pub async fn check() -> Json<HealthReport> {
    Json(HealthReport::for_service(HealthStatus::Ok, SERVICE_NAME))
}
