//! Periodic heartbeat loop.

use std::future::Future;

use chrono::{SecondsFormat, Utc};
use tokio::time::{Instant, MissedTickBehavior};

use crate::SERVICE_NAME;
use crate::config::WorkerConfig;

/// Logs a heartbeat every `config.interval` until `shutdown` resolves and
/// returns the number of heartbeats emitted.
///
/// The first heartbeat fires one full interval after start.
pub async fn run<F>(config: &WorkerConfig, shutdown: F) -> u64
where
    F: Future<Output = ()>,
{
    let period = config.interval;
    tracing::info!(
        service = SERVICE_NAME,
        interval_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
        "order-worker started"
    );

    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut beats: u64 = 0;
    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => break,
            _ = ticker.tick() => {
                beats += 1;
                beat(beats);
            }
        }
    }

    tracing::info!(service = SERVICE_NAME, heartbeats = beats, "order-worker stopped");
    beats
}

fn beat(seq: u64) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    metrics::counter!("worker_heartbeats_total").increment(1);
    tracing::info!(%timestamp, seq, "heartbeat");
}
