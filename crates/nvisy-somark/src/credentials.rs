//! Somark credential bundle.

use std::fmt;

use nvisy_plugin::Credentials;

use crate::DEFAULT_BASE_URL;

/// Credential key holding the API key.
pub const API_KEY: &str = "api_key";

/// Credential key holding the base URL.
pub const BASE_URL: &str = "base_url";

/// API key and base URL read from host-managed storage.
///
/// Read by value once per invocation and never written back.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SomarkCredentials {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl SomarkCredentials {
    /// Creates credentials with an API key and the default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Returns the API key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the base URL, falling back to [`DEFAULT_BASE_URL`] when unset or empty.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Converts into the host's credential map.
    pub fn into_credentials(self) -> Credentials {
        [(API_KEY, self.api_key), (BASE_URL, self.base_url)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_owned(), value)))
            .collect()
    }
}

impl From<&Credentials> for SomarkCredentials {
    fn from(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.get(API_KEY).cloned(),
            base_url: credentials.get(BASE_URL).cloned(),
        }
    }
}

impl fmt::Debug for SomarkCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SomarkCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
