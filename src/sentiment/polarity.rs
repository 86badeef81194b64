//! Polarity estimation collaborator boundary
//!
//! The statistical polarity model lives outside this crate. The scoring
//! pipeline depends on the [`PolarityEstimator`] trait only;
//! [`HttpPolarityClient`] talks to the real service and tests substitute
//! fixed doubles.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::errors::SolaceError;

/// Sentence-level polarity/subjectivity estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolaritySignal {
    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,
    /// Subjectivity in [0.0, 1.0]
    pub subjectivity: f64,
}

/// Estimates sentence-level polarity and subjectivity for a piece of text.
///
/// Failures propagate to the caller; the scoring pipeline does not retry.
#[async_trait]
pub trait PolarityEstimator: Send + Sync {
    async fn estimate(&self, text: &str) -> Result<PolaritySignal>;
}

/// Client for a remote polarity estimation service
pub struct HttpPolarityClient {
    endpoint: String,
    client: Client,
}

impl HttpPolarityClient {
    /// Create a new polarity client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.polarity_timeout_secs()))
            .build()
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        Ok(Self {
            endpoint: config.polarity_endpoint().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl PolarityEstimator for HttpPolarityClient {
    async fn estimate(&self, text: &str) -> Result<PolaritySignal> {
        #[derive(Serialize)]
        struct EstimateRequest<'a> {
            text: &'a str,
        }

        #[derive(Deserialize)]
        struct EstimateResponse {
            polarity: f64,
            subjectivity: f64,
        }

        let url = format!("{}/estimate", self.endpoint);
        debug!("Calling polarity service: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&EstimateRequest { text })
            .send()
            .await
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SolaceError::AnalysisError(format!(
                "Polarity service error ({status}): {error_text}"
            )));
        }

        let result: EstimateResponse = response
            .json()
            .await
            .map_err(|e| SolaceError::AnalysisError(format!("Failed to parse response: {e}")))?;

        Ok(PolaritySignal {
            polarity: result.polarity,
            subjectivity: result.subjectivity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "Requires a running polarity service"]
    async fn test_estimate_against_live_service() {
        let config = AppConfig::default();
        let client = HttpPolarityClient::new(&config).unwrap();

        let signal = client.estimate("I am delighted with today").await.unwrap();
        assert!(signal.polarity >= -1.0 && signal.polarity <= 1.0);
        assert!(signal.subjectivity >= 0.0 && signal.subjectivity <= 1.0);
    }
}
