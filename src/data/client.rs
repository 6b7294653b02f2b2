//! Async HTTP client for the population dataset
//!
//! The dataset is retrieved once with a plain GET; the response body must be
//! a JSON array of records. No auth, no query parameters, no pagination.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::core::config::ChartConfig;
use crate::core::error::{PopError, Result};
use crate::data::record::PopulationRecord;

/// Anything that can supply the full record set
pub trait DatasetSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<PopulationRecord>>> + Send;
}

/// HTTP client for the population API
pub struct PopulationClient {
    client: Client,
    api_url: String,
}

impl PopulationClient {
    /// Create a new client for `api_url` with a whole-request timeout
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PopError::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Create a client from the chart configuration
    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        Self::new(config.api_url.clone(), config.request_timeout())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET the dataset and decode it
    pub async fn fetch_records(&self) -> Result<Vec<PopulationRecord>> {
        let response = self
            .client
            .get(&self.api_url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| PopError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PopError::Fetch(format!("HTTP {}: {}", status, error_text)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PopError::Fetch(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| PopError::Decode(e.to_string()))
    }
}

impl DatasetSource for PopulationClient {
    async fn fetch(&self) -> Result<Vec<PopulationRecord>> {
        self.fetch_records().await
    }
}
