//! Error types for nvisy-somark.

use std::error::Error as StdError;

/// Result type for all Somark operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Missing input detected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Precondition {
    /// No file parameter was supplied.
    #[error("No file provided.")]
    MissingFile,
    /// No API key is stored for the provider.
    #[error("API Key is required.")]
    MissingApiKey,
}

/// Error types for Somark extraction.
///
/// Every variant is terminal for an invocation; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required input is missing.
    #[error("{0}")]
    Precondition(#[from] Precondition),

    /// Request could not be built, sent or read (connection, timeout, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with a status other than 200.
    #[error("{status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body is not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid client configuration (base URL, MIME type, ...).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Create an API error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was raised before contacting the API
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }

    /// Check if the request ran into the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Precondition(_) => "precondition",
            Error::Transport(_) => "transport",
            Error::Api { .. } => "api",
            Error::Parse(_) => "parse",
            Error::Config { .. } => "config",
        }
    }

    /// Renders the error, followed by its chain of sources.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = StdError::source(self);

        while let Some(err) = source {
            let text = err.to_string();
            if !report.ends_with(&text) {
                report.push_str(": ");
                report.push_str(&text);
            }
            source = err.source();
        }

        report
    }

    /// Get the message relayed to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            Error::Precondition(precondition) => format!("Error: {precondition}"),
            Error::Api { status, body } => format!("Somark API Error: {status} - {body}"),
            _ => format!("Error invoking Somark API: {}", self.report()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages() {
        assert_eq!(
            Error::from(Precondition::MissingFile).user_message(),
            "Error: No file provided."
        );
        assert_eq!(
            Error::from(Precondition::MissingApiKey).user_message(),
            "Error: API Key is required."
        );
        assert!(Error::from(Precondition::MissingFile).is_precondition());
        assert_eq!(Precondition::MissingApiKey.to_string(), "API Key is required.");
    }

    #[test]
    fn test_api_error_message() {
        let error = Error::api(404, "not found");
        assert_eq!(error.user_message(), "Somark API Error: 404 - not found");
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.category(), "api");
        assert!(!error.is_precondition());
    }

    #[test]
    fn test_parse_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let expected = source.to_string();
        let error = Error::from(source);

        assert_eq!(error.category(), "parse");
        assert_eq!(
            error.user_message(),
            format!("Error invoking Somark API: {expected}")
        );
    }

    #[test]
    fn test_config_error_message() {
        let error = Error::config("Invalid base URL ''");
        assert_eq!(
            error.user_message(),
            "Error invoking Somark API: Configuration error: Invalid base URL ''"
        );
        assert_eq!(error.status_code(), None);
        assert!(!error.is_timeout());
    }
}
