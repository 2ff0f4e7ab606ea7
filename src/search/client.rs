//! HTTP client for the search backend

use crate::config::SearchSettings;
use crate::suggest::SuggestError;
use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Client for one search index
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
    index: String,
}

impl SearchClient {
    /// Create a new search client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&SearchSettings::default())
    }

    /// Create a new search client from settings
    pub fn with_settings(settings: &SearchSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            index: settings.index.clone(),
        })
    }

    /// Execute a query against the index
    ///
    /// One POST to `{endpoint}/{index}/_search`, single attempt. A non-2xx
    /// status or an undecodable body counts as a failure.
    pub async fn search(&self, body: &Value) -> Result<Value, SuggestError> {
        let url = format!(
            "{}/{}/_search",
            self.endpoint.as_str().trim_end_matches('/'),
            self.index
        );

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let content = response.json().await?;

        Ok(content)
    }

    /// Name of the queried index
    pub fn index(&self) -> &str {
        &self.index
    }
}
