//! Plugin tools exposed by the Somark provider.

mod extract;

pub use extract::{ExtractTool, FILE_PARAMETER, TOOL_NAME};
