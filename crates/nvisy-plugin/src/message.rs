//! Messages emitted by tool invocations.

use std::fmt;

use futures::StreamExt;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

/// Lazy, finite sequence of messages produced by a single tool invocation.
///
/// The stream is not restartable: invoking the tool again produces a new one.
pub type ToolMessageStream = BoxStream<'static, ToolInvokeMessage>;

/// A single message relayed from a tool back to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolInvokeMessage {
    /// Plain text shown to the user as-is.
    Text {
        /// Message content.
        text: String,
    },
}

impl ToolInvokeMessage {
    /// Creates a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

impl fmt::Display for ToolInvokeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text } => f.write_str(text),
        }
    }
}

/// Drains a message stream into a vector.
pub async fn collect_messages(stream: ToolMessageStream) -> Vec<ToolInvokeMessage> {
    stream.collect().await
}
