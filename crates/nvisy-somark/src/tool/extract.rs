//! Document extraction tool.

use std::time::Duration;

use futures::{StreamExt, stream};
use nvisy_plugin::{
    Tool, ToolDefinition, ToolFile, ToolInvokeMessage, ToolMessageStream, ToolParameterSpec,
    ToolParameters, ToolRuntime,
};

use crate::{
    DEFAULT_TIMEOUT, Precondition, Result, SmClient, SmConfig, SomarkCredentials,
    TRACING_TARGET_TOOL, UploadRequest, extract_text,
};

/// Name under which the tool is registered.
pub const TOOL_NAME: &str = "extract";

/// Name of the file parameter.
pub const FILE_PARAMETER: &str = "file";

/// Sends one document to Somark and relays the extracted text.
///
/// Every invocation yields exactly one text message, which is either the
/// extraction result or a human-readable error. Nothing is retried.
#[derive(Debug, Clone)]
pub struct ExtractTool {
    timeout: Duration,
}

impl ExtractTool {
    /// Creates the tool with the default request timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs one extraction and returns the text relayed to the user.
    ///
    /// Failures are rendered with [`Error::user_message`] instead of being
    /// returned.
    ///
    /// [`Error::user_message`]: crate::Error::user_message
    pub async fn run(&self, credentials: SomarkCredentials, file: Option<ToolFile>) -> String {
        match self.try_run(&credentials, file).await {
            Ok(text) => text,
            Err(error) if error.is_precondition() => {
                tracing::warn!(
                    target: TRACING_TARGET_TOOL,
                    error = %error,
                    "Somark extraction rejected"
                );
                error.user_message()
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_TOOL,
                    category = error.category(),
                    status = ?error.status_code(),
                    timeout = error.is_timeout(),
                    error = %error.report(),
                    "Somark extraction failed"
                );
                error.user_message()
            }
        }
    }

    async fn try_run(
        &self,
        credentials: &SomarkCredentials,
        file: Option<ToolFile>,
    ) -> Result<String> {
        let file = file.ok_or(Precondition::MissingFile)?;
        let api_key = credentials.api_key().ok_or(Precondition::MissingApiKey)?;

        let config = SmConfig::new(credentials.base_url())?.with_timeout(self.timeout);

        tracing::info!(
            target: TRACING_TARGET_TOOL,
            endpoint = %config.endpoint(),
            filename = %file.filename,
            "Sending request to Somark"
        );

        let client = SmClient::new(config)?;
        let body = client.extract(api_key, UploadRequest::from(&file)).await?;

        extract_text(body)
    }
}

impl Default for ExtractTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ExtractTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            TOOL_NAME,
            "Extract text from a document or image as Markdown",
        )
        .with_parameter(ToolParameterSpec::file(
            FILE_PARAMETER,
            "Document or image to extract text from",
        ))
    }

    fn invoke(&self, runtime: ToolRuntime, mut parameters: ToolParameters) -> ToolMessageStream {
        let tool = self.clone();
        let credentials = SomarkCredentials::from(runtime.credentials());
        let file = parameters.take_file(FILE_PARAMETER);

        stream::once(async move { ToolInvokeMessage::text(tool.run(credentials, file).await) })
            .boxed()
    }
}
