use std::time::Duration;

use crate::LogLevel;

/// Default Personio API v1 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.personio.de/v1";

/// Largest page the upstream returns for a single list call.
pub const MAX_PAGE_SIZE: usize = 200;

/// Configuration for [`crate::ServiceClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without trailing slash.
    pub base_url: String,

    /// Timeout applied to every HTTP call.
    pub timeout: Duration,

    /// Records requested per list call (at most [`MAX_PAGE_SIZE`]).
    pub page_size: usize,

    /// Verbosity of per-request logging.
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(40),
            page_size: MAX_PAGE_SIZE,
            log_level: LogLevel::default(),
        }
    }
}

impl ClientConfig {
    /// Sets a custom base URL, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the per-call page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Sets the logging verbosity.
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}
