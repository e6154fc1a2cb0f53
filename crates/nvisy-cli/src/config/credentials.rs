//! Somark credential configuration.

use std::fmt;

use clap::Args;
use nvisy_plugin::Credentials;
use nvisy_somark::{API_KEY, BASE_URL, SomarkCredentials};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Credentials stored for the Somark provider.
///
/// # Environment Variables
///
/// - `SOMARK_API_KEY` - API key sent with every upload
/// - `SOMARK_BASE_URL` - Base URL of the extraction API
#[derive(Clone, Default, Args, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Somark API key.
    #[arg(long, env = "SOMARK_API_KEY", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Base URL of the Somark extraction API.
    ///
    /// The `acc_sync` endpoint is appended to it.
    #[arg(long, env = "SOMARK_BASE_URL")]
    pub base_url: Option<String>,
}

impl CredentialsConfig {
    /// Returns the credential map handed to the provider and the tool.
    ///
    /// Unset options are left out of the map.
    pub fn to_credentials(&self) -> Credentials {
        [(API_KEY, &self.api_key), (BASE_URL, &self.base_url)]
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|value| (key.to_owned(), value)))
            .collect()
    }

    /// Returns the typed Somark credentials.
    pub fn to_somark(&self) -> SomarkCredentials {
        SomarkCredentials::from(&self.to_credentials())
    }

    /// Logs credential configuration without the API key.
    pub fn log(&self) {
        let credentials = self.to_somark();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            api_key_set = credentials.api_key().is_some(),
            base_url = credentials.base_url(),
            "Somark credentials"
        );
    }
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
