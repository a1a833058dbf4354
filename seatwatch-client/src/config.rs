//! Client configuration

use std::time::Duration;

/// Default refresh cadence (30 seconds)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Client configuration for connecting to the booking server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Refresh cadence for the availability presenter
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the refresh cadence
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
