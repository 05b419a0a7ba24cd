//! Client configuration

use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend server root, without a trailing slash
    /// (e.g. `http://127.0.0.1:8000`); the catalog lives under `/basic/`
    /// and academic records under `/api/academic/`
    pub base_url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("PORTAL_API_URL").map_err(|_| ConfigError::Missing("PORTAL_API_URL"))?;

        let request_timeout_secs: u64 = std::env::var("PORTAL_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORTAL_REQUEST_TIMEOUT_SECS"))?;

        Ok(Self::new(base_url).with_request_timeout(Duration::from_secs(request_timeout_secs)))
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable holds an unparseable value
    #[error("invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
