//! Runtime configuration.
//!
//! The backend endpoint is the only externally configurable behavior:
//! production by default, the local development server when `CIRCDESK_DEV`
//! is set, or an explicit override via `CIRCDESK_API_URL`.

use std::time::Duration;

/// Deployed backend, used unless dev mode or an override says otherwise.
pub const PROD_BASE_URL: &str = "https://circdesk-api.fly.dev/api";

/// Local backend used during development (CIRCDESK_DEV=1).
pub const DEV_BASE_URL: &str = "http://localhost:3000/api";

/// How long a single request may run before the attempt is abandoned.
///
/// The backend configures no timeout of its own; without this a hung
/// request would leave a form stuck in its submitting state forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for all requests, ending in `/api`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: PROD_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig pointing at the production backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are trimmed so endpoint paths
    /// can always be joined with a single `/`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create config from the environment.
    ///
    /// `CIRCDESK_API_URL` takes precedence; otherwise `CIRCDESK_DEV=1`
    /// selects the local backend.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("CIRCDESK_API_URL") {
            if !url.trim().is_empty() {
                return Self::default().with_base_url(url.trim());
            }
        }
        if std::env::var("CIRCDESK_DEV").is_ok() {
            return Self::default().with_base_url(DEV_BASE_URL);
        }
        Self::default()
    }
}
