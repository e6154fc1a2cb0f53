//! Somark HTTP client module.
//!
//! This module provides the client interface for the Somark synchronous
//! extraction endpoint.

mod request;
mod sm_client;
mod sm_config;

pub use request::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT_FORMAT, UploadRequest};
pub use sm_client::SmClient;
pub use sm_config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SYNC_ENDPOINT, SmConfig, endpoint_url};
