#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for Somark client operations.
pub const TRACING_TARGET_CLIENT: &str = "nvisy_somark::client";

/// Tracing target for Somark tool invocations.
pub const TRACING_TARGET_TOOL: &str = "nvisy_somark::tool";

mod client;
mod credentials;
mod error;
mod provider;
pub mod response;
mod tool;

pub use crate::client::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_OUTPUT_FORMAT, DEFAULT_TIMEOUT, SYNC_ENDPOINT,
    SmClient, SmConfig, UploadRequest, endpoint_url,
};
pub use crate::credentials::{API_KEY, BASE_URL, SomarkCredentials};
pub use crate::error::{Error, Precondition, Result};
pub use crate::provider::SomarkProvider;
pub use crate::response::{extract_text, to_json_text};
pub use crate::tool::{ExtractTool, FILE_PARAMETER, TOOL_NAME};
