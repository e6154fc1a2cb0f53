//! Tool invocation configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Upper bound for the request timeout, in seconds.
const MAX_TIMEOUT_SECS: u64 = 600;

/// How emitted tool messages are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Message text as-is.
    #[default]
    Text,
    /// One JSON object per message and line.
    Json,
}

/// Input file and output options for a single invocation.
///
/// # Environment Variables
///
/// - `SOMARK_MIME_TYPE` - MIME type override for the input file
/// - `SOMARK_TIMEOUT` - Request timeout in seconds (default: 120, max: 600)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct InvocationConfig {
    /// Document or image to extract text from.
    ///
    /// When omitted, the tool is invoked without a file and reports it.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// MIME type of the file, instead of guessing it from the extension.
    #[arg(long, env = "SOMARK_MIME_TYPE")]
    pub mime_type: Option<String>,

    /// How emitted messages are printed to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum time in seconds to wait for the extraction API.
    #[arg(long, env = "SOMARK_TIMEOUT", default_value_t = 120)]
    pub timeout: u64,

    /// Do not run the provider's credential validation first.
    #[arg(long)]
    #[serde(default)]
    pub skip_validation: bool,
}

impl InvocationConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the timeout is outside 1-600 seconds
    /// - the MIME type override is empty
    /// - the file is given but is not a regular file
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.timeout == 0 || self.timeout > MAX_TIMEOUT_SECS {
            return Err(anyhow!(
                "Timeout {} seconds is invalid. Must be between 1 and {} seconds.",
                self.timeout,
                MAX_TIMEOUT_SECS
            ));
        }

        if self.mime_type.as_deref().is_some_and(str::is_empty) {
            return Err(anyhow!("MIME type override must not be empty"));
        }

        if let Some(file) = &self.file
            && !file.is_file()
        {
            return Err(anyhow!("'{}' is not a readable file", file.display()));
        }

        Ok(())
    }

    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Logs invocation configuration.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            file = ?self.file,
            mime_type = ?self.mime_type,
            format = ?self.format,
            timeout_secs = self.timeout,
            skip_validation = self.skip_validation,
            "Invocation configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(file: Option<PathBuf>) -> InvocationConfig {
        InvocationConfig {
            file,
            mime_type: None,
            format: OutputFormat::Text,
            timeout: 120,
            skip_validation: false,
        }
    }

    #[test]
    fn test_validate_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(config(Some(file.path().to_path_buf())).validate().is_ok());
        assert!(config(None).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(config(Some(dir.path().join("missing.pdf"))).validate().is_err());
        assert!(config(Some(dir.path().to_path_buf())).validate().is_err());
    }

    #[test]
    fn test_validate_timeout_range() {
        let mut config = config(None);

        config.timeout = 0;
        assert!(config.validate().is_err());

        config.timeout = MAX_TIMEOUT_SECS + 1;
        assert!(config.validate().is_err());

        config.timeout = MAX_TIMEOUT_SECS;
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(600));
    }

    #[test]
    fn test_validate_rejects_empty_mime_type() {
        let mut config = config(None);
        config.mime_type = Some(String::new());
        assert!(config.validate().is_err());
    }
}
