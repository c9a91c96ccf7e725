//! Shared service kit for the storefront fleet.
//!
//! Holds the JSON records the services answer with, environment-driven
//! configuration, the tracing and Prometheus setup, the middleware stack
//! wrapped around every router, and the server lifecycle with graceful
//! shutdown.

pub mod config;
pub mod error;
pub mod layers;
pub mod metrics;
pub mod server;
pub mod service;
pub mod telemetry;
pub mod types;

pub use config::{Config, ConfigError, LogFormat, TelemetryConfig};
pub use error::{Result, ServiceError};
pub use service::ServiceInfo;
pub use types::{HealthReport, HealthStatus, WelcomeMessage};
