//! Prelude for the nvisy-plugin crate
//!
//! This module re-exports the types a plugin or host needs for a single import.

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::file::ToolFile;
pub use crate::message::{ToolInvokeMessage, ToolMessageStream};
pub use crate::parameters::ToolParameters;
pub use crate::provider::ToolProvider;
pub use crate::runtime::{Credentials, ToolRuntime};
pub use crate::tool::{Tool, ToolDefinition};
