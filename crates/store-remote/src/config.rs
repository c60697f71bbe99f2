//! Connection settings for the remote backend.

use std::time::Duration;

/// Default request timeout applied to both remote clients.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URLs and timeout for the keyed-collection database and the object
/// store. Timeouts are the only network policy applied here; retries stay
/// with the callers.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub database_url: String,
    pub storage_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(database_url: impl Into<String>, storage_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            storage_url: storage_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
