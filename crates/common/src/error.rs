//! Process-level error types shared by every service binary.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can stop a service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize tracing: {0}")]
    Telemetry(String),

    /// The Prometheus exporter could not be installed.
    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;
