pub mod history;
pub mod result;
pub mod routing;
pub mod upload;

use std::fmt::Write;

use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

/// Transport-level failures a probe can hit before it gets to classify a
/// response. Always downgraded to a failed [`result::ProbeResult`] at the
/// probe boundary; nothing here ever crosses into the runner.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection refused, DNS failure or timeout before a status line.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The status line arrived but the body could not be read off the wire.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Render an error and its full source chain as a single line.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

/// One HTTP client plus the resolved API root. Cloning is cheap, the inner
/// `reqwest::Client` is already reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_root: String,
}

impl ApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let api_root = format!("{}/api", base_url);
        Self {
            client,
            base_url,
            api_root,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<(StatusCode, String), ProbeError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProbeError::Network)?;
        Self::split(response).await
    }

    /// POST with an empty body, no content type.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(StatusCode, String), ProbeError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST (empty body)");
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(ProbeError::Network)?;
        Self::split(response).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: Form,
    ) -> Result<(StatusCode, String), ProbeError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST (multipart)");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ProbeError::Network)?;
        Self::split(response).await
    }

    async fn split(response: Response) -> Result<(StatusCode, String), ProbeError> {
        let status = response.status();
        let body = response.text().await.map_err(ProbeError::Body)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");
        Ok((status, body))
    }
}
