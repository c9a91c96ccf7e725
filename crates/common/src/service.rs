//! Common startup sequence for HTTP service binaries.

use axum::Router;

use crate::config::Config;
use crate::error::Result;
use crate::{layers, metrics, server, telemetry};

/// Static identity of a deployable HTTP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub default_port: u16,
}

/// Loads configuration, installs tracing and metrics, then serves the route
/// table built by `create_app` until shutdown.
pub async fn run(info: ServiceInfo, create_app: fn() -> Router) -> Result<()> {
    let config = Config::from_env(info.default_port)?;
    telemetry::init(&config.telemetry)?;
    metrics::install(&config.telemetry)?;

    let app = layers::with_observability(create_app());
    tracing::info!(
        service = info.name,
        version = info.version,
        addr = %config.addr(),
        "starting service"
    );

    server::serve(app, &config)
        .await
        .inspect_err(|err| tracing::error!(service = info.name, error = %err, "service stopped"))
}
