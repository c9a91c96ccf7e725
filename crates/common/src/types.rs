use serde::Serialize;

/// Value of the `status` field in a health-check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Healthy,
}

/// Body of a health-check endpoint.
///
/// Some services echo their identity in a `service` field; others report
/// only the status, in which case the key is left out of the JSON entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'static str>,
}

impl HealthReport {
    /// A report carrying only a status.
    pub const fn new(status: HealthStatus) -> Self {
        Self {
            status,
            service: None,
        }
    }

    /// A report that also names the reporting service.
    pub const fn for_service(status: HealthStatus, service: &'static str) -> Self {
        Self {
            status,
            service: Some(service),
        }
    }
}

/// Body of a root endpoint: a single static greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WelcomeMessage {
    pub message: &'static str,
}

impl WelcomeMessage {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
