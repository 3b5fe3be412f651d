// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editee multi-model gateway provider adapter for the Jeevi agent.
//!
//! This crate implements [`TextProvider`](jeevi_core::TextProvider)
//! over the Editee gateway, which fronts several upstream models
//! (gpt4, claude, gemini) behind one HTTP endpoint. Requests with
//! `stream` set take the chunked real-time path; `web_access` asks
//! the backend to consult live web results.

pub mod client;
pub mod types;

use async_trait::async_trait;
use jeevi_config::model::EditeeConfig;
use jeevi_core::traits::{PluginAdapter, TextProvider};
use jeevi_core::types::{AdapterType, HealthStatus, ProviderCall};
use jeevi_core::JeeviError;
use tracing::info;

use crate::client::EditeeClient;
use crate::types::GatewayRequest;

/// Editee gateway provider implementing [`TextProvider`].
pub struct EditeeProvider {
    client: EditeeClient,
}

impl EditeeProvider {
    /// Creates a new Editee provider from the given configuration.
    pub fn new(config: &EditeeConfig) -> Result<Self, JeeviError> {
        let client = EditeeClient::new(&config.base_url)?;
        info!(base_url = config.base_url, "Editee provider initialized");
        Ok(Self { client })
    }

    #[cfg(test)]
    fn with_client(client: EditeeClient) -> Self {
        Self { client }
    }

    /// Converts a [`ProviderCall`] to a [`GatewayRequest`].
    ///
    /// System prompt and rendered history are joined into the single
    /// free-text `context` block the gateway expects.
    fn to_gateway_request(call: &ProviderCall) -> GatewayRequest {
        let mut context = String::new();
        if let Some(ref system) = call.system_prompt {
            context.push_str(system);
        }
        if let Some(ref history) = call.history {
            if !context.is_empty() {
                context.push_str("\n\n");
            }
            context.push_str(history);
        }

        GatewayRequest {
            context,
            selected_model: call.model.clone(),
            prompt: call.prompt.clone(),
            web_access: call.web_access,
        }
    }
}

#[async_trait]
impl PluginAdapter for EditeeProvider {
    fn name(&self) -> &str {
        "editee"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, JeeviError> {
        // The gateway has no dedicated health endpoint; reachability
        // problems surface on the first generate call.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), JeeviError> {
        Ok(())
    }
}

#[async_trait]
impl TextProvider for EditeeProvider {
    async fn generate(&self, call: ProviderCall) -> Result<String, JeeviError> {
        let request = Self::to_gateway_request(&call);
        if call.stream {
            self.client.stream_text(&request).await
        } else {
            self.client.generate(&request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(base_url: &str) -> EditeeProvider {
        let client = EditeeClient::new("https://example.invalid")
            .unwrap()
            .with_base_url(base_url.to_string());
        EditeeProvider::with_client(client)
    }

    #[test]
    fn context_joins_system_prompt_and_history() {
        let call = ProviderCall {
            model: "gpt4".into(),
            prompt: "q".into(),
            system_prompt: Some("You are Jeevi.".into()),
            history: Some("Human: hi\nJeevi: hello".into()),
            stream: false,
            web_access: false,
        };
        let req = EditeeProvider::to_gateway_request(&call);
        assert_eq!(req.context, "You are Jeevi.\n\nHuman: hi\nJeevi: hello");
    }

    #[test]
    fn context_is_empty_when_call_carries_neither() {
        let req = EditeeProvider::to_gateway_request(&ProviderCall::text("gpt4", "q"));
        assert!(req.context.is_empty());
    }

    #[tokio::test]
    async fn non_streaming_call_uses_json_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "selected_model": "gpt4",
                "web_access": false,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "answer"})),
            )
            .mount(&server)
            .await;

        let text = provider(&server.uri())
            .generate(ProviderCall::text("gpt4", "q"))
            .await
            .unwrap();
        assert_eq!(text, "answer");
    }

    #[tokio::test]
    async fn streaming_call_aggregates_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "selected_model": "gemini",
                "web_access": true,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("live answer"))
            .mount(&server)
            .await;

        let call = ProviderCall {
            model: "gemini".into(),
            prompt: "q".into(),
            system_prompt: None,
            history: None,
            stream: true,
            web_access: true,
        };
        let text = provider(&server.uri()).generate(call).await.unwrap();
        assert_eq!(text, "live answer");
    }
}
