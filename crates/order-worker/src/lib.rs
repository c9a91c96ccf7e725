//! Background worker for the order pipeline.
//!
//! Currently the worker has no queue to drain: it only proves liveness by
//! logging a heartbeat on a fixed interval until it is asked to shut down.

pub mod config;
pub mod heartbeat;

pub use config::WorkerConfig;
pub use heartbeat::run;

pub const SERVICE_NAME: &str = "order-worker";
