//! Somark tool provider.

use std::sync::Arc;

use nvisy_plugin::{
    CredentialField, Credentials, ProviderIdentity, TRACING_TARGET_PROVIDER, Tool, ToolProvider,
};

use crate::{API_KEY, BASE_URL, DEFAULT_BASE_URL, ExtractTool};

/// Somark plugin provider.
///
/// Declares the Somark credentials and exposes the [`ExtractTool`].
///
/// # Example
///
/// ```rust,ignore
/// use nvisy_plugin::ToolProvider;
/// use nvisy_somark::{SomarkCredentials, SomarkProvider};
///
/// let provider = SomarkProvider::new();
/// let credentials = SomarkCredentials::new("sk-...").into_credentials();
/// provider.validate_credentials(&credentials).await?;
/// let tool = provider.tool("extract").expect("extract tool");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SomarkProvider;

impl SomarkProvider {
    /// Creates a new Somark provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ToolProvider for SomarkProvider {
    fn identity(&self) -> ProviderIdentity {
        ProviderIdentity::new(
            "somark",
            "Somark",
            "Extract text from documents and images with the Somark API",
        )
    }

    fn credentials_schema(&self) -> Vec<CredentialField> {
        vec![
            CredentialField::secret(API_KEY).required(),
            CredentialField::text(BASE_URL).with_default(DEFAULT_BASE_URL),
        ]
    }

    /// Accepts every credential set.
    ///
    /// Missing API keys are reported by the tool at invocation time.
    async fn validate_credentials(&self, credentials: &Credentials) -> nvisy_plugin::Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            provider = "somark",
            keys = ?credentials.keys().collect::<Vec<_>>(),
            "Accepting credentials without validation"
        );

        Ok(())
    }

    fn tools(&self) -> Vec<Arc<dyn Tool>> {
        vec![Arc::new(ExtractTool::new())]
    }
}
