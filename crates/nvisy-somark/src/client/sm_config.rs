//! Configuration for the Somark HTTP client.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://somark.tech/api/v1/extract";

/// Path segment of the synchronous extraction endpoint.
pub const SYNC_ENDPOINT: &str = "acc_sync";

/// Default timeout for a single extraction request: 120 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds the extraction endpoint for a base URL.
///
/// Trailing separators are stripped before the endpoint is appended, so
/// `https://x.test/api/` and `https://x.test/api` both resolve to
/// `https://x.test/api/acc_sync`.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), SYNC_ENDPOINT)
}

/// Configuration for the Somark HTTP client.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use nvisy_somark::SmConfig;
///
/// let config = SmConfig::new("https://somark.tech/api/v1/extract")?
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.endpoint().path(), "/api/v1/extract/acc_sync");
/// ```
#[derive(Debug, Clone)]
pub struct SmConfig {
    /// Resolved extraction endpoint
    endpoint: Url,

    /// Request timeout duration
    timeout: Duration,
}

impl SmConfig {
    /// Create a new configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the resulting endpoint is not a valid URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        let endpoint = Url::parse(&endpoint_url(base_url))
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Get the extraction endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SmConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(&endpoint_url(DEFAULT_BASE_URL))
                .expect("Default URL should be valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
