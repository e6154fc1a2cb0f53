//! Somark HTTP client implementation.

use std::time::Instant;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{SmConfig, UploadRequest};
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// HTTP client for the Somark extraction API.
///
/// Each call sends exactly one request. Failures are returned as-is; the
/// client never retries.
///
/// # Examples
///
/// ```ignore
/// use nvisy_somark::{SmClient, SmConfig, UploadRequest};
///
/// let client = SmClient::new(SmConfig::default())?;
/// let bytes = std::fs::read("invoice.pdf")?;
/// let request = UploadRequest::new("invoice.pdf", bytes, "application/pdf");
///
/// let body = client.extract("sk-...", request).await?;
/// println!("{body}");
/// ```
#[derive(Debug, Clone)]
pub struct SmClient {
    /// HTTP client
    http_client: Client,

    /// Configuration
    config: SmConfig,
}

impl SmClient {
    /// Create a new Somark client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: SmConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint(),
            timeout = ?config.timeout(),
            "Somark client initialized"
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Upload a document and return the parsed JSON response.
    ///
    /// The request is `multipart/form-data` with the document in the `file`
    /// part and the `api_key`, `lang` and `output_formats` form fields. A list
    /// of output formats is sent as one `output_formats` field per entry.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request cannot be sent or times out
    /// - [`Error::Api`] if the status is anything but `200 OK`
    /// - [`Error::Parse`] if the body is not JSON
    pub async fn extract(&self, api_key: &str, request: UploadRequest) -> Result<Value> {
        let started_at = Instant::now();
        let size = request.size();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %self.config.endpoint(),
            filename = %request.filename,
            mime_type = %request.mime_type,
            size,
            "Sending document to Somark"
        );

        let form = Self::build_form(api_key, request)?;

        let response = self
            .http_client
            .post(self.config.endpoint().clone())
            .multipart(form)
            .send()
            .await?;

        let result = self.handle_response(response).await;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            success = result.is_ok(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Received response from Somark"
        );

        result
    }

    /// Build the multipart form for an upload.
    fn build_form(api_key: &str, request: UploadRequest) -> Result<Form> {
        let UploadRequest {
            filename,
            content,
            mime_type,
            language,
            output_formats,
        } = request;

        let file = Part::bytes(content.to_vec())
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| Error::config(format!("Invalid MIME type '{}': {}", mime_type, e)))?;

        let form = Form::new()
            .part("file", file)
            .text("api_key", api_key.to_owned())
            .text("lang", language);

        Ok(output_formats
            .into_iter()
            .fold(form, |form, format| form.text("output_formats", format)))
    }

    /// Handle HTTP response and convert to result.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(Error::api(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn client_for(server: &mockito::Server) -> SmClient {
        let config = SmConfig::new(format!("{}/api/", server.url())).unwrap();
        SmClient::new(config).unwrap()
    }

    fn sample_request() -> UploadRequest {
        UploadRequest::new("report.pdf", b"%PDF-1.7 body".to_vec(), "application/pdf")
    }

    #[tokio::test]
    async fn test_extract_sends_multipart_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/acc_sync")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_header("user-agent", Matcher::Missing)
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="report.pdf""#.into()),
                Matcher::Regex(r"Content-Type: application/pdf\r\n\r\n%PDF-1\.7 body".into()),
                Matcher::Regex(r#"name="api_key"\r\n\r\nsk-test\r\n"#.into()),
                Matcher::Regex(r#"name="lang"\r\n\r\nauto\r\n"#.into()),
                Matcher::Regex(r#"name="output_formats"\r\n\r\nmarkdown\r\n"#.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r##"{"data":{"result":{"outputs":{"markdown":"# Hi"}}}}"##)
            .expect(1)
            .create_async()
            .await;

        let body = client_for(&server)
            .extract("sk-test", sample_request())
            .await
            .unwrap();

        assert_eq!(body, json!({"data": {"result": {"outputs": {"markdown": "# Hi"}}}}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_non_200_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/acc_sync")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let error = client_for(&server)
            .extract("sk-test", sample_request())
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.user_message(), "Somark API Error: 404 - not found");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_other_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/acc_sync")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let error = client_for(&server)
            .extract("sk-test", sample_request())
            .await
            .unwrap_err();

        assert_eq!(error.user_message(), "Somark API Error: 201 - {}");
    }

    #[tokio::test]
    async fn test_extract_invalid_json_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/acc_sync")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let error = client_for(&server)
            .extract("sk-test", sample_request())
            .await
            .unwrap_err();

        let parse_error =
            serde_json::from_str::<Value>("<html>gateway</html>").unwrap_err();
        assert_eq!(error.category(), "parse");
        assert_eq!(
            error.user_message(),
            format!("Error invoking Somark API: {parse_error}")
        );
    }

    #[test]
    fn test_invalid_mime_type() {
        let request = UploadRequest::new("a.bin", vec![1u8], "not a mime type");
        let error = SmClient::build_form("sk-test", request).unwrap_err();

        assert_eq!(error.category(), "config");
    }
}
