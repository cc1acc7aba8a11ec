// HTTP client for the Congress.gov API

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::bill::BillRecord;

const CONGRESS_API_URL: &str = "https://api.congress.gov/v3";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Congress.gov bill endpoint, shared by the train and serve
/// flows. Fetch failures propagate to the caller; there is no retry.
pub struct CongressClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CongressClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: CONGRESS_API_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one bill's XML record and extract its fields
    pub async fn fetch_bill(
        &self,
        congress: u32,
        bill_type: &str,
        bill_num: u32,
    ) -> Result<BillRecord> {
        let url = format!(
            "{}/bill/{}/{}/{}",
            self.base_url, congress, bill_type, bill_num
        );

        tracing::debug!(%url, "Fetching bill from Congress.gov");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "xml"), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to send request to Congress.gov")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Congress.gov request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read Congress.gov response body")?;

        BillRecord::from_xml(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CongressClient::new("test-key".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_override() {
        let client = CongressClient::new("test-key".to_string())
            .unwrap()
            .with_base_url("http://localhost:1234");
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
