// HTTP client for the Gemini API

use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::retry::with_retry;
use super::types::{GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const SUMMARY_MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Ask Gemini for a prose summary of the bill with the given title.
    /// An empty title is rejected before any request is sent.
    pub async fn summarize_bill(&self, bill_title: &str) -> Result<String> {
        if bill_title.trim().is_empty() {
            bail!("Bill title is empty. Cannot summarize an empty title.");
        }

        let request = summary_request(bill_title);
        with_retry(|| self.generate_once(&request)).await
    }

    /// Send a single generateContent request (no retry)
    async fn generate_once(&self, request: &GeminiRequest) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, SUMMARY_MODEL
        );

        tracing::debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            bail!(
                "Gemini API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        gemini_response
            .text()
            .context("Gemini returned no candidates in response")
    }
}

/// The fixed instructional prompt with the bill title embedded
fn summary_request(bill_title: &str) -> GeminiRequest {
    let prompt = format!(
        "Please provide an informational and educational summary of the \
        following bill titled '{bill_title}':\n\n The summary should be factual and \
        provide key details about the bill's purpose, main provisions, and any \
        significant impacts. Please do not generate any information that doesn't directly have \
        to do with the bill (such as informing me that I did not provide enough information). \
        Please search the web for the information if you can. If you are unable to, please create a \
        summary from the information you know. Please keep your response educational and precise, and style \
        it for better user readability. If there are multiple bills with the same number, list all of \
        them."
    );

    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: prompt }],
        }],
        generation_config: GeminiGenerationConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_summary_request_embeds_title() {
        let request = summary_request("Postal Service Reform Act");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert!(request.contents[0].parts[0]
            .text
            .contains("'Postal Service Reform Act'"));
    }

    #[tokio::test]
    async fn test_empty_title_rejected_without_request() {
        let client = GeminiClient::new("test-key".to_string()).unwrap();
        let error = client.summarize_bill("   ").await.unwrap_err();
        assert!(error.to_string().contains("empty"));
    }
}
