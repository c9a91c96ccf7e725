//! Prometheus exporter installation and per-request metrics.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::config::TelemetryConfig;
use crate::error::Result;

/// Label used for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Installs the global Prometheus recorder with its own scrape listener when
/// `METRICS_ADDR` is configured. Returns whether an exporter was started.
///
/// Failures are logged before being returned, so call this after
/// [`crate::telemetry::init`]. Must be called from within a tokio runtime.
pub fn install(config: &TelemetryConfig) -> Result<bool> {
    let Some(addr) = config.metrics_addr else {
        tracing::debug!("METRICS_ADDR not set, metrics exporter disabled");
        return Ok(false);
    };

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .inspect_err(|err| tracing::error!(%addr, error = %err, "failed to start metrics exporter"))?;
    tracing::info!(%addr, "prometheus exporter listening");
    Ok(true)
}

/// Middleware recording `http_requests_total` and
/// `http_request_duration_seconds` for every request.
///
/// The `path` label is the matched route template so unknown paths collapse
/// into [`UNMATCHED_PATH`].
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_PATH.to_string(), |p| p.as_str().to_string());
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(start.elapsed().as_secs_f64());

    response
}
