// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Editee text gateway.
//!
//! Provides [`EditeeClient`] which handles request construction,
//! chunked streaming bodies, and transient error retry.

use std::time::Duration;

use futures::StreamExt;
use jeevi_core::JeeviError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{GatewayErrorResponse, GatewayRequest, GatewayResponse};

/// HTTP client for Editee gateway communication.
///
/// Manages connection pooling and retry logic for transient errors
/// (429, 500, 503).
#[derive(Debug, Clone)]
pub struct EditeeClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl EditeeClient {
    /// Creates a new gateway client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, JeeviError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| JeeviError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_retries: 1,
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a non-streaming request and returns the response text.
    ///
    /// On transient errors (429, 500, 503), retries once after a
    /// 1-second delay.
    pub async fn generate(&self, request: &GatewayRequest) -> Result<String, JeeviError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying gateway request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self.post(request).await?;
            let status = response.status();
            debug!(status = %status, attempt, "gateway response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| JeeviError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let parsed: GatewayResponse =
                    serde_json::from_str(&body).map_err(|e| JeeviError::Provider {
                        message: format!("failed to parse gateway response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(parsed.text);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(JeeviError::provider(format!(
                    "gateway returned {status}: {body}"
                )));
                continue;
            }

            return Err(Self::hard_error(status, response).await);
        }

        Err(last_error
            .unwrap_or_else(|| JeeviError::provider("gateway request failed after retries")))
    }

    /// Sends a streaming request and aggregates the chunked body.
    ///
    /// The gateway streams plain UTF-8 text for `stream` requests; the
    /// chunks are concatenated into the final answer. Same retry
    /// policy as [`generate`](Self::generate).
    pub async fn stream_text(&self, request: &GatewayRequest) -> Result<String, JeeviError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying streaming request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self.post(request).await?;
            let status = response.status();
            debug!(status = %status, attempt, "streaming response received");

            if status.is_success() {
                let mut body = Vec::new();
                let mut chunks = response.bytes_stream();
                while let Some(chunk) = chunks.next().await {
                    let chunk = chunk.map_err(|e| JeeviError::Provider {
                        message: format!("stream interrupted: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                    body.extend_from_slice(&chunk);
                }
                return String::from_utf8(body).map_err(|e| JeeviError::Provider {
                    message: format!("streamed body is not valid UTF-8: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(JeeviError::provider(format!(
                    "gateway returned {status}: {body}"
                )));
                continue;
            }

            return Err(Self::hard_error(status, response).await);
        }

        Err(last_error
            .unwrap_or_else(|| JeeviError::provider("streaming request failed after retries")))
    }

    async fn post(&self, request: &GatewayRequest) -> Result<reqwest::Response, JeeviError> {
        self.client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| JeeviError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    async fn hard_error(status: reqwest::StatusCode, response: reqwest::Response) -> JeeviError {
        let body = response.text().await.unwrap_or_default();
        let message = if let Ok(err) = serde_json::from_str::<GatewayErrorResponse>(&body) {
            format!("Editee gateway error: {}", err.error)
        } else {
            format!("gateway returned {status}: {body}")
        };
        JeeviError::provider(message)
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
