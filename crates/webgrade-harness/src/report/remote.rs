//! Remote push sink.

use tracing::debug;

use webgrade_core::ReportBundle;

use crate::error::HarnessError;

/// Client for the remote grading endpoint.
///
/// One POST per rubric entry, `Content-Type: application/json`, body =
/// the serialised bundle. The response body is logged by the caller and
/// not otherwise acted upon. There is no request timeout: a hung push
/// stalls its own entry without blocking the others.
pub struct RemoteSink {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSink {
    /// Create a sink for the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("webgrade/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Submit a bundle; returns the response body on success.
    pub async fn push(&self, bundle: &ReportBundle) -> Result<String, HarnessError> {
        debug!(endpoint = %self.endpoint, "pushing report bundle");
        let response = self
            .client
            .post(&self.endpoint)
            .json(bundle)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
