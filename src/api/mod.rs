use crate::internal::models::Story;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire shape of the backend's story collection endpoint.
#[derive(Debug, Deserialize)]
struct StoriesEnvelope {
    stories: Vec<Story>,
}

/// HTTP client for the story backend.
///
/// This is the only component that performs network I/O. Failures carry a
/// short human-readable context via `anyhow::Context`; the raw error chain
/// stays available for the logs.
#[derive(Debug, Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn stories_url(&self) -> String {
        format!("{}/stories", self.base_url)
    }

    /// Fetch the full story collection in one request.
    ///
    /// Network failure, a non-success status, and a malformed body are all
    /// errors; there is no partial result and no defensive repair of
    /// individual story entries.
    pub async fn fetch_stories(&self) -> Result<Vec<Story>> {
        let url = self.stories_url();

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("could not reach the story backend at {url}"))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("the story backend returned an error for {url}"))?;

        let envelope: StoriesEnvelope = response
            .json()
            .await
            .with_context(|| format!("could not parse the story response from {url}"))?;

        Ok(envelope.stories)
    }
}
