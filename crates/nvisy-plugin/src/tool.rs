//! Tool trait and its self-description.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{ToolMessageStream, ToolParameters, ToolRuntime};

/// Core trait for plugin tools.
///
/// A tool never fails past its own boundary: every failure, including bad
/// input, is reported as a message in the returned stream.
pub trait Tool: Send + Sync {
    /// Describes the tool and the parameters it accepts.
    fn definition(&self) -> ToolDefinition;

    /// Runs the tool once.
    fn invoke(&self, runtime: ToolRuntime, parameters: ToolParameters) -> ToolMessageStream;
}

/// Kind of value a tool parameter carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ParameterKind {
    /// Uploaded file.
    File,
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Kind of value expected.
    pub kind: ParameterKind,
    /// Whether the host must supply the parameter.
    pub required: bool,
    /// Human-readable description.
    pub description: String,
}

impl ToolParameterSpec {
    /// Declares a required file parameter.
    pub fn file(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::File,
            required: true,
            description: description.into(),
        }
    }
}

/// Self-description of a tool, as shown to hosts and users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name within its provider.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Accepted parameters.
    pub parameters: Vec<ToolParameterSpec>,
}

impl ToolDefinition {
    /// Creates a definition without parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter declaration.
    pub fn with_parameter(mut self, parameter: ToolParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the declaration of the named parameter.
    pub fn parameter(&self, name: &str) -> Option<&ToolParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_definition_builder() {
        let definition = ToolDefinition::new("extract", "Extract text")
            .with_parameter(ToolParameterSpec::file("file", "Document to extract"));

        assert_eq!(definition.parameters.len(), 1);
        assert!(definition.parameter("file").unwrap().required);
        assert!(definition.parameter("missing").is_none());
    }

    #[test]
    fn test_definition_serialization() {
        let definition = ToolDefinition::new("extract", "Extract text")
            .with_parameter(ToolParameterSpec::file("file", "Document"));

        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "extract",
                "description": "Extract text",
                "parameters": [{
                    "name": "file",
                    "kind": "file",
                    "required": true,
                    "description": "Document",
                }],
            })
        );
    }

    #[test]
    fn test_parameter_kind_display() {
        assert_eq!(ParameterKind::File.to_string(), "file");
        assert_eq!(ParameterKind::File.as_ref(), "file");
    }
}
