//! order-worker entry point.

use order_worker::WorkerConfig;

#[tokio::main]
async fn main() -> common::Result<()> {
    let config = WorkerConfig::from_env()?;
    common::telemetry::init(&config.telemetry)?;
    common::metrics::install(&config.telemetry)?;

    order_worker::run(&config, common::server::shutdown_signal()).await;
    Ok(())
}
