//! Configuration for the session manager

use std::path::PathBuf;
use std::time::Duration;

/// Auth configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Backend base URL, without a trailing slash (e.g. `http://127.0.0.1:8000/api`)
    pub base_url: String,
    /// Durable token storage location
    pub storage_path: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl AuthConfig {
    /// Create a new auth config
    pub fn new(base_url: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            storage_path: storage_path.into(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Login endpoint
    pub fn login_url(&self) -> String {
        format!("{}/auth/login/", self.base_url)
    }

    /// Token refresh endpoint
    pub fn refresh_url(&self) -> String {
        format!("{}/auth/token/refresh/", self.base_url)
    }

    /// Registration endpoint
    pub fn register_url(&self) -> String {
        format!("{}/auth/register/", self.base_url)
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = AuthConfig::new("http://127.0.0.1:8000/api", "/tmp/tokens.json");
        assert_eq!(config.login_url(), "http://127.0.0.1:8000/api/auth/login/");
        assert_eq!(
            config.refresh_url(),
            "http://127.0.0.1:8000/api/auth/token/refresh/"
        );
        assert_eq!(
            config.register_url(),
            "http://127.0.0.1:8000/api/auth/register/"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = AuthConfig::new("http://localhost:8000/api/", "/tmp/tokens.json");
        assert_eq!(config.login_url(), "http://localhost:8000/api/auth/login/");
    }
}
