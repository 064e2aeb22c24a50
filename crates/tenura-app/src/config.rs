//! Dispatch configuration.

use std::time::Duration;

/// Configuration for notification dispatch and list refresh.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Delay before a notification send completes.
    pub send_delay: Duration,
    /// Delay before a refresh re-lists the collection.
    pub refresh_delay: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(1200),
            refresh_delay: Duration::from_millis(800),
        }
    }
}
