//! Named parameters of a single tool invocation.

use std::collections::HashMap;

use crate::ToolFile;

/// Parameters passed by the host to one tool invocation.
///
/// Hosts upload files out of band and hand them to the tool by name.
#[derive(Debug, Clone, Default)]
pub struct ToolParameters {
    files: HashMap<String, ToolFile>,
}

impl ToolParameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file parameter.
    pub fn with_file(mut self, name: impl Into<String>, file: ToolFile) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// Returns the file parameter with the given name.
    pub fn file(&self, name: &str) -> Option<&ToolFile> {
        self.files.get(name)
    }

    /// Removes and returns the file parameter with the given name.
    pub fn take_file(&mut self, name: &str) -> Option<ToolFile> {
        self.files.remove(name)
    }
}
