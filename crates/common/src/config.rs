//! Service configuration loaded from environment variables.

use std::net::{AddrParseError, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    #[error("invalid LOG_FORMAT value {value:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat { value: String },

    #[error("invalid METRICS_ADDR value {value:?}: {source}")]
    InvalidMetricsAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid {key} value {value:?}: expected a positive number of milliseconds")]
    InvalidDuration { key: &'static str, value: String },
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Logging and metrics settings shared by every process in the fleet.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `METRICS_ADDR` — Prometheus scrape address (default: unset, no exporter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_addr: Option<SocketAddr>,
}

impl TelemetryConfig {
    /// Loads telemetry settings through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let log_format = match var(&lookup, "LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };
        let metrics_addr = var(&lookup, "METRICS_ADDR")
            .map(|value| {
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::InvalidMetricsAddr { value, source })
            })
            .transpose()?;

        Ok(Self {
            log_level: var(&lookup, "RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            metrics_addr,
        })
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
            metrics_addr: None,
        }
    }
}

/// HTTP server configuration.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: per service)
/// - everything [`TelemetryConfig`] reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables. Values are trimmed before parsing.
    pub fn from_lookup<L>(default_port: u16, lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let port = match var(&lookup, "PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => default_port,
        };

        Ok(Self {
            host: var(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            telemetry: TelemetryConfig::from_lookup(&lookup)?,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default configuration for a service listening on `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port,
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Reads a millisecond duration from `key`, rejecting zero and non-numeric
/// values.
pub fn duration_ms<L>(lookup: L, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let Some(value) = var(&lookup, key) else {
        return Ok(default);
    };
    let parsed = value.parse::<u64>();
    match parsed {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidDuration { key, value }),
    }
}

fn var<L>(lookup: &L, key: &str) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
