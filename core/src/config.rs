//! Data-layer configuration.
//!
//! Built once at startup and handed to `BlogApi::from_config`; nothing in the
//! crate reads the environment on its own.

use std::time::Duration;

/// Relative, as served behind the frontend's dev proxy. `UreqTransport` needs
/// an absolute URL, so live use outside that proxy must set `BLOG_API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "/api";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_BASE_URL: &str = "BLOG_API_BASE_URL";
pub const ENV_USE_MOCK: &str = "BLOG_USE_MOCK";
pub const ENV_APP_ENV: &str = "BLOG_APP_ENV";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub use_mock: bool,
    /// Diagnostic label only; never changes behavior.
    pub environment: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            use_mock: false,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`. Empty values fall back to defaults,
    /// and mock mode is enabled only by the exact string `"true"`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            base_url: non_empty(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            use_mock: lookup(ENV_USE_MOCK).as_deref() == Some("true"),
            environment: non_empty(ENV_APP_ENV).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Whether `base_url` carries an `http://` or `https://` scheme.
    pub fn has_absolute_base_url(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
