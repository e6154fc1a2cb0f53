#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for tool invocations.
pub const TRACING_TARGET_TOOL: &str = "nvisy_plugin::tool";

/// Tracing target for provider operations.
pub const TRACING_TARGET_PROVIDER: &str = "nvisy_plugin::provider";

mod error;
mod file;
mod message;
mod parameters;
#[doc(hidden)]
pub mod prelude;
mod provider;
mod runtime;
mod tool;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::file::{DEFAULT_MIME_TYPE, ToolFile, guess_mime_type};
pub use crate::message::{ToolInvokeMessage, ToolMessageStream, collect_messages};
pub use crate::parameters::ToolParameters;
pub use crate::provider::{CredentialField, CredentialKind, ProviderIdentity, ToolProvider};
pub use crate::runtime::{Credentials, ToolRuntime};
pub use crate::tool::{ParameterKind, Tool, ToolDefinition, ToolParameterSpec};
