//! Worker configuration loaded from environment variables.

use std::time::Duration;

use common::config::duration_ms;
use common::{ConfigError, TelemetryConfig};

/// Heartbeat period used when `WORKER_INTERVAL_MS` is unset.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Reads from environment variables:
/// - `WORKER_INTERVAL_MS` — heartbeat period in milliseconds (default: `5000`)
/// - everything [`TelemetryConfig`] reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub interval: Duration,
    pub telemetry: TelemetryConfig,
}

impl WorkerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            interval: duration_ms(&lookup, "WORKER_INTERVAL_MS", DEFAULT_INTERVAL)?,
            telemetry: TelemetryConfig::from_lookup(&lookup)?,
        })
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            telemetry: TelemetryConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let config = WorkerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, WorkerConfig::default());
        assert_eq!(config.interval, Duration::from_secs(5));
    }

    #[test]
    fn test_interval_override() {
        let config = WorkerConfig::from_lookup(|key| {
            (key == "WORKER_INTERVAL_MS").then(|| "1500".to_string())
        })
        .unwrap();
        assert_eq!(config.interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = WorkerConfig::from_lookup(|key| {
            (key == "WORKER_INTERVAL_MS").then(|| "0".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                key: "WORKER_INTERVAL_MS",
                ..
            }
        ));
    }
}
