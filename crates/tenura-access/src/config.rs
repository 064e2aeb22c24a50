//! Access configuration.

use std::time::Duration;

/// Configuration for the settings service.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Endpoint receiving the settings `PUT`.
    pub settings_endpoint: String,
    /// Outbound request timeout.
    pub request_timeout: Duration,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            settings_endpoint: "http://127.0.0.1:8080/api/settings".into(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
