//! Local plugin host.
//!
//! Plays the part of a plugin runtime for one invocation of the Somark
//! `extract` tool: credentials are checked by the provider, the file is read
//! from disk, and every message the tool emits is printed to stdout.

use std::io::{self, Write};

use anyhow::Context;
use nvisy_plugin::collect_messages;
use nvisy_plugin::prelude::*;
use nvisy_somark::{ExtractTool, FILE_PARAMETER, SomarkProvider};

use crate::TRACING_TARGET_HOST;
use crate::config::{Cli, InvocationConfig, OutputFormat};

/// Runs the extraction tool once and prints its messages.
///
/// # Errors
///
/// Returns an error for host failures only: rejected credentials, an
/// unreadable file or a closed stdout. Failures reported by the tool are
/// printed like any other message.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let provider = SomarkProvider::new();
    let identity = provider.identity();
    let credentials = cli.credentials.to_credentials();

    if cli.invocation.skip_validation {
        tracing::debug!(
            target: TRACING_TARGET_HOST,
            provider = %identity.name,
            "Skipping credential validation"
        );
    } else {
        if let Err(error) = provider.validate_credentials(&credentials).await {
            tracing::error!(
                target: TRACING_TARGET_HOST,
                provider = %identity.name,
                kind = %error.kind(),
                "Credential validation failed"
            );
            return Err(anyhow::Error::new(error)
                .context(format!("credentials rejected by provider '{}'", identity.name)));
        }
    }

    let parameters = load_parameters(&cli.invocation).await?;
    let tool = ExtractTool::new().with_timeout(cli.invocation.timeout());

    tracing::debug!(
        target: TRACING_TARGET_HOST,
        provider = %identity.name,
        tool = %tool.definition().name,
        "Invoking tool"
    );

    let messages = collect_messages(tool.invoke(ToolRuntime::new(credentials), parameters)).await;

    tracing::debug!(
        target: TRACING_TARGET_HOST,
        count = messages.len(),
        "Tool finished"
    );

    let mut stdout = io::stdout().lock();
    for message in &messages {
        let line = render(message, cli.invocation.format)?;
        writeln!(stdout, "{line}").context("failed to write to stdout")?;
    }
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

/// Builds the tool parameters from the invocation options.
async fn load_parameters(config: &InvocationConfig) -> anyhow::Result<ToolParameters> {
    let Some(path) = &config.file else {
        return Ok(ToolParameters::new());
    };

    let mut file = ToolFile::from_path(path)
        .await
        .with_context(|| format!("failed to load '{}'", path.display()))?;

    if let Some(mime_type) = &config.mime_type {
        file = file.with_mime_type(mime_type.clone());
    }

    tracing::debug!(
        target: TRACING_TARGET_HOST,
        filename = %file.filename,
        mime_type = %file.mime_type,
        size = file.size(),
        "Loaded input file"
    );

    Ok(ToolParameters::new().with_file(FILE_PARAMETER, file))
}

/// Renders a message for stdout.
fn render(message: &ToolInvokeMessage, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(message.to_string()),
        OutputFormat::Json => serde_json::to_string(message).context("failed to serialize message"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn invocation(file: Option<PathBuf>, mime_type: Option<&str>) -> InvocationConfig {
        InvocationConfig {
            file,
            mime_type: mime_type.map(str::to_owned),
            format: OutputFormat::Text,
            timeout: 120,
            skip_validation: false,
        }
    }

    #[test]
    fn test_render_text() {
        let message = ToolInvokeMessage::text("# Título");
        assert_eq!(render(&message, OutputFormat::Text).unwrap(), "# Título");
    }

    #[test]
    fn test_render_json() {
        let line = render(&ToolInvokeMessage::text("# Hi"), OutputFormat::Json).unwrap();
        assert_eq!(line, r##"{"type":"text","text":"# Hi"}"##);

        let line = render(&ToolInvokeMessage::text("{\"a\": 1}"), OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"type":"text","text":"{\"a\": 1}"}"#);
    }

    #[tokio::test]
    async fn test_load_parameters_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, b"png bytes").unwrap();

        let parameters = load_parameters(&invocation(Some(path), None)).await.unwrap();
        let file = parameters.file(FILE_PARAMETER).unwrap();

        assert_eq!(file.filename, "scan.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(&file.blob[..], b"png bytes");
    }

    #[tokio::test]
    async fn test_load_parameters_applies_mime_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.bin");
        std::fs::write(&path, b"data").unwrap();

        let config = invocation(Some(path), Some("application/pdf"));
        let parameters = load_parameters(&config).await.unwrap();

        assert_eq!(
            parameters.file(FILE_PARAMETER).unwrap().mime_type,
            "application/pdf"
        );
    }

    #[tokio::test]
    async fn test_load_parameters_without_file() {
        let parameters = load_parameters(&invocation(None, None)).await.unwrap();
        assert!(parameters.file(FILE_PARAMETER).is_none());
    }

    #[tokio::test]
    async fn test_load_parameters_missing_file_is_host_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = invocation(Some(dir.path().join("missing.pdf")), None);

        assert!(load_parameters(&config).await.is_err());
    }
}
