use std::time::Duration;

use async_trait::async_trait;

use heatvote_core::catalog;
use heatvote_core::types::FolderId;

use crate::error::LabelError;
use crate::LabelSource;

/// HTTP implementation of [`LabelSource`] backed by [`reqwest`].
///
/// Every fetch is bounded by the client-level timeout; a slow or unreachable
/// asset host surfaces as an error instead of stalling the request.
pub struct HttpLabelSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLabelSource {
    /// Create a label fetcher for the given asset-host base URL.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, base_url }
    }
}

#[async_trait]
impl LabelSource for HttpLabelSource {
    async fn object_name(&self, folder_id: FolderId) -> Result<String, LabelError> {
        let url = catalog::label_url(&self.base_url, folder_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(folder_id, %status, "Label fetch returned non-success");
            return Err(LabelError::Status {
                folder_id,
                status: status.as_u16(),
            });
        }

        // Label files routinely carry a trailing newline.
        let body = response.text().await?;
        Ok(body.trim().to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
