use std::future::Future;

use reqwest::Client;
use tracing::{debug, warn};

use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::config::ClientConfig;
use crate::error::{AppError, ErrorResponse, Result};

/// Anything that can turn a video URL into summary text.
pub trait Summarizer {
    fn summarize(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client for the summarize endpoint.
#[derive(Clone, Debug)]
pub struct SummaryClient {
    http: Client,
    endpoint: String,
}

impl SummaryClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Summarizer for SummaryClient {
    async fn summarize(&self, url: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, url, "Requesting summary");

        let res = self
            .http
            .post(&self.endpoint)
            .json(&SummarizeRequest { url: url.to_string() })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // Prefer the reason the service gave us, if it sent one
            let body = res.text().await.unwrap_or_default();
            return match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(ErrorResponse { error }) if !error.is_empty() => {
                    warn!(%status, %error, "Summarize request rejected");
                    Err(AppError::Rejected(error))
                }
                _ => {
                    warn!(%status, "Summarize request failed without an error message");
                    Err(AppError::Upstream(format!("Summarizer responded with {}", status)))
                }
            };
        }

        let body: SummarizeResponse = res
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid response format from summarizer: {}", e)))?;

        Ok(body.summary)
    }
}
