//! Upload request sent to the extraction endpoint.

use std::fmt;

use bytes::Bytes;
use nvisy_plugin::{DEFAULT_MIME_TYPE, ToolFile};

/// Language hint sent with every upload.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Output format requested from the API.
pub const DEFAULT_OUTPUT_FORMAT: &str = "markdown";

/// A single document upload.
///
/// Built once per invocation and consumed by [`SmClient::extract`].
///
/// [`SmClient::extract`]: crate::SmClient::extract
#[derive(Clone)]
pub struct UploadRequest {
    /// File name sent in the multipart part
    pub filename: String,
    /// Raw document bytes
    pub content: Bytes,
    /// Declared MIME type of the document
    pub mime_type: String,
    /// Language hint
    pub language: String,
    /// Requested output formats
    pub output_formats: Vec<String>,
}

impl UploadRequest {
    /// Create an upload with the fixed language and output format.
    ///
    /// An empty MIME type is replaced by `application/octet-stream`.
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<Bytes>,
        mime_type: impl Into<String>,
    ) -> Self {
        let mut mime_type = mime_type.into();
        if mime_type.is_empty() {
            mime_type = DEFAULT_MIME_TYPE.to_owned();
        }

        Self {
            filename: filename.into(),
            content: content.into(),
            mime_type,
            language: DEFAULT_LANGUAGE.to_owned(),
            output_formats: vec![DEFAULT_OUTPUT_FORMAT.to_owned()],
        }
    }

    /// Get the content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl From<&ToolFile> for UploadRequest {
    fn from(file: &ToolFile) -> Self {
        Self::new(file.filename.clone(), file.blob.clone(), file.mime_type.clone())
    }
}

impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("filename", &self.filename)
            .field("size", &self.content.len())
            .field("mime_type", &self.mime_type)
            .field("language", &self.language)
            .field("output_formats", &self.output_formats)
            .finish()
    }
}
