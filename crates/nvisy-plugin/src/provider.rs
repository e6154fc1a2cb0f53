//! Tool provider trait.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{Credentials, Result, Tool};

/// Identity of a provider, as shown to hosts and users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    /// Unique provider name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Human-readable description.
    pub description: String,
}

impl ProviderIdentity {
    /// Creates a new provider identity.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// How the host should collect and store a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CredentialKind {
    /// Secret value, masked in the host UI and never logged.
    SecretInput,
    /// Plain text value.
    TextInput,
}

/// Declaration of a single credential a provider needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialField {
    /// Credential key.
    pub name: String,
    /// How the value is collected.
    pub kind: CredentialKind,
    /// Whether the host must collect the value.
    pub required: bool,
    /// Value used when none is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl CredentialField {
    /// Declares an optional secret credential.
    pub fn secret(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CredentialKind::SecretInput,
            required: false,
            default: None,
        }
    }

    /// Declares an optional plain text credential.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CredentialKind::TextInput,
            required: false,
            default: None,
        }
    }

    /// Marks the credential as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the value used when none is stored.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Trait implemented by every plugin.
///
/// A provider owns the credential schema shared by its tools and decides
/// whether a stored credential set is usable before any tool runs.
#[async_trait::async_trait]
pub trait ToolProvider: Send + Sync {
    /// Returns the provider identity.
    fn identity(&self) -> ProviderIdentity;

    /// Declares the credentials this provider needs.
    fn credentials_schema(&self) -> Vec<CredentialField>;

    /// Checks a credential set before it is stored or used.
    async fn validate_credentials(&self, credentials: &Credentials) -> Result<()>;

    /// Returns every tool this provider exposes.
    fn tools(&self) -> Vec<Arc<dyn Tool>>;

    /// Returns the tool with the given name.
    fn tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools()
            .into_iter()
            .find(|tool| tool.definition().name == name)
    }
}
