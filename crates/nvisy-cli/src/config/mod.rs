//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── credentials: CredentialsConfig  # API key, base URL
//! └── invocation: InvocationConfig    # File, MIME type, output, timeout
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

mod credentials;
mod invocation;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use credentials::CredentialsConfig;
pub use invocation::{InvocationConfig, OutputFormat};
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "nvisy-cli")]
#[command(about = "Extract text from documents with the Somark plugin tool")]
#[command(version)]
pub struct Cli {
    /// Somark credentials handed to the tool.
    #[clap(flatten)]
    pub credentials: CredentialsConfig,

    /// What to extract and how to print it.
    #[clap(flatten)]
    pub invocation: InvocationConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded first so that clap's `env` feature picks up its
    /// values as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.invocation
            .validate()
            .context("invalid invocation configuration")?;
        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        self.credentials.log();
        self.invocation.log();

        tracing::trace!(target: TRACING_TARGET_CONFIG, "Configuration loaded");
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
