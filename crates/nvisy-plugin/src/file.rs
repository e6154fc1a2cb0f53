//! Files handed to tools by the host.

use std::fmt;
use std::path::Path;

use bytes::Bytes;

use crate::{Error, Result, TRACING_TARGET_TOOL};

/// MIME type used when nothing better is known about a file.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file parameter as uploaded to the host.
///
/// The content is held as [`Bytes`], so cloning a file does not copy it.
#[derive(Clone, PartialEq, Eq)]
pub struct ToolFile {
    /// Original file name, including the extension.
    pub filename: String,
    /// Declared MIME type of the content.
    pub mime_type: String,
    /// Raw file content.
    pub blob: Bytes,
}

impl ToolFile {
    /// Creates a file from its parts.
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        blob: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            blob: blob.into(),
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::invalid_input()
                    .with_message(format!("Path '{}' has no file name", path.display()))
            })?;

        let blob = tokio::fs::read(path).await.map_err(|e| {
            Error::from(e).with_message(format!("Failed to read file '{}'", path.display()))
        })?;

        let mime_type = guess_mime_type(path);

        tracing::debug!(
            target: TRACING_TARGET_TOOL,
            filename = %filename,
            mime_type,
            size = blob.len(),
            "Loaded tool file"
        );

        Ok(Self::new(filename, mime_type, blob))
    }

    /// Replaces the declared MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Returns the content size in bytes.
    pub fn size(&self) -> usize {
        self.blob.len()
    }
}

impl fmt::Debug for ToolFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolFile")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("size", &self.blob.len())
            .finish()
    }
}

/// Guesses a MIME type from the file extension.
///
/// Covers the document and image formats extraction services accept and
/// falls back to [`DEFAULT_MIME_TYPE`].
pub fn guess_mime_type(path: &Path) -> &'static str {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_MIME_TYPE;
    };

    match extension.to_lowercase().as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tiff" | "tif" => "image/tiff",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "txt" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        _ => DEFAULT_MIME_TYPE,
    }
}
