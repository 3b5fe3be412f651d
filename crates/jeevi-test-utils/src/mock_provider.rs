// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock text provider with scripted responses and a call log.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use jeevi_core::traits::{PluginAdapter, TextProvider};
use jeevi_core::types::{AdapterType, HealthStatus, ProviderCall};
use jeevi_core::JeeviError;

/// A mock provider that pops scripted responses from a FIFO queue.
///
/// Each queue entry is either a response text or a scripted failure
/// message (returned as a provider error). When the queue is empty, a
/// default "mock response" text is returned. Every call is recorded
/// for call-count and prompt assertions.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<ProviderCall>>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<&str>) -> Self {
        let queue: VecDeque<Result<String, String>> =
            responses.into_iter().map(|r| Ok(r.to_string())).collect();
        Self {
            responses: Arc::new(Mutex::new(queue)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful response.
    pub async fn push_response(&self, text: impl Into<String>) {
        self.responses.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a scripted provider failure.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.responses.lock().await.push_back(Err(message.into()));
    }

    /// Number of generate calls made so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Snapshot of all calls made so far, in order.
    pub async fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, JeeviError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), JeeviError> {
        Ok(())
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    async fn generate(&self, call: ProviderCall) -> Result<String, JeeviError> {
        self.calls.lock().await.push(call);

        match self.responses.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(JeeviError::provider(message)),
            None => Ok("mock response".to_string()),
        }
    }
}
