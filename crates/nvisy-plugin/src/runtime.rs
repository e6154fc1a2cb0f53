//! Host-provided runtime state for tool invocations.

use std::collections::BTreeMap;
use std::fmt;

/// Credentials as stored by the host for a provider.
///
/// Keys follow the provider's credential schema; values are opaque strings.
pub type Credentials = BTreeMap<String, String>;

/// Runtime handed to a tool for one invocation.
///
/// Tools read credentials from here by value; nothing written to the runtime
/// outlives the invocation.
#[derive(Clone, Default)]
pub struct ToolRuntime {
    credentials: Credentials,
}

impl ToolRuntime {
    /// Creates a runtime carrying the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns all stored credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl fmt::Debug for ToolRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credential values are secrets; only the keys are printed.
        f.debug_struct("ToolRuntime")
            .field("credentials", &self.credentials.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_lookup() {
        let credentials = Credentials::from([("api_key".to_owned(), "sk-123".to_owned())]);
        let runtime = ToolRuntime::new(credentials);

        assert_eq!(
            runtime.credentials().get("api_key").map(String::as_str),
            Some("sk-123")
        );
        assert!(runtime.credentials().get("base_url").is_none());
    }

    #[test]
    fn test_debug_redacts_values() {
        let credentials = Credentials::from([("api_key".to_owned(), "sk-123".to_owned())]);
        let debug = format!("{:?}", ToolRuntime::new(credentials));

        assert!(debug.contains("api_key"));
        assert!(!debug.contains("sk-123"));
    }
}
