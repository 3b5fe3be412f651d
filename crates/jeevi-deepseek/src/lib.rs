// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DeepSeek provider adapter for the Jeevi agent.
//!
//! This crate implements [`TextProvider`](jeevi_core::TextProvider)
//! over the DeepSeek chat completions API, with an explicit
//! `initialize()`/`close()` lifecycle around the pooled HTTP session.
//! Calls made outside the open window fail as provider errors rather
//! than panicking, so concurrent callers can race shutdown safely.

pub mod client;
pub mod types;

use async_trait::async_trait;
use jeevi_config::model::DeepseekConfig;
use jeevi_core::traits::{PluginAdapter, TextProvider};
use jeevi_core::types::{AdapterType, HealthStatus, ProviderCall};
use jeevi_core::JeeviError;
use tokio::sync::RwLock;
use tracing::info;

use crate::client::DeepseekClient;
use crate::types::{ChatMessage, ChatRequest};

/// DeepSeek provider implementing [`TextProvider`].
///
/// API key resolution order: config -> `DEEPSEEK_API_KEY` env var ->
/// error.
pub struct DeepseekProvider {
    config: DeepseekConfig,
    session: RwLock<Option<DeepseekClient>>,
}

impl DeepseekProvider {
    /// Creates a provider in the closed state; call
    /// [`initialize`](Self::initialize) before generating.
    pub fn new(config: DeepseekConfig) -> Self {
        Self {
            config,
            session: RwLock::new(None),
        }
    }

    /// Opens the pooled HTTP session. Idempotent.
    pub async fn initialize(&self) -> Result<(), JeeviError> {
        let mut session = self.session.write().await;
        if session.is_some() {
            return Ok(());
        }
        let api_key = resolve_api_key(&self.config.api_key)?;
        *session = Some(DeepseekClient::new(&api_key, &self.config.base_url)?);
        info!(base_url = self.config.base_url, "DeepSeek session opened");
        Ok(())
    }

    /// Closes the pooled session; in-flight calls holding the read
    /// lock complete first.
    pub async fn close(&self) {
        let mut session = self.session.write().await;
        if session.take().is_some() {
            info!("DeepSeek session closed");
        }
    }

    #[cfg(test)]
    async fn with_client(config: DeepseekConfig, client: DeepseekClient) -> Self {
        let provider = Self::new(config);
        *provider.session.write().await = Some(client);
        provider
    }

    fn to_chat_request(call: &ProviderCall) -> ChatRequest {
        let mut messages = Vec::new();
        if let Some(ref system) = call.system_prompt {
            messages.push(ChatMessage::system(system));
        }
        if let Some(ref history) = call.history {
            messages.push(ChatMessage::system(format!(
                "Conversation so far:\n{history}"
            )));
        }
        messages.push(ChatMessage::user(&call.prompt));

        ChatRequest {
            model: call.model.clone(),
            messages,
            stream: false,
        }
    }
}

fn resolve_api_key(configured: &Option<String>) -> Result<String, JeeviError> {
    if let Some(key) = configured {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }
    std::env::var("DEEPSEEK_API_KEY").map_err(|_| {
        JeeviError::Config(
            "DeepSeek API key not found: set deepseek.api_key or DEEPSEEK_API_KEY".to_string(),
        )
    })
}

#[async_trait]
impl PluginAdapter for DeepseekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, JeeviError> {
        if self.session.read().await.is_some() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy("session not initialized".into()))
        }
    }

    async fn shutdown(&self) -> Result<(), JeeviError> {
        self.close().await;
        Ok(())
    }
}

#[async_trait]
impl TextProvider for DeepseekProvider {
    async fn generate(&self, call: ProviderCall) -> Result<String, JeeviError> {
        let session = self.session.read().await;
        let client = session
            .as_ref()
            .ok_or_else(|| JeeviError::provider("DeepSeek session not initialized"))?;
        client.chat(&Self::to_chat_request(&call)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn success_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": text}}]
        })
    }

    async fn provider(base_url: &str) -> DeepseekProvider {
        let client = DeepseekClient::new("test-api-key", "https://example.invalid")
            .unwrap()
            .with_base_url(base_url.to_string());
        DeepseekProvider::with_client(DeepseekConfig::default(), client).await
    }

    #[test]
    fn chat_request_orders_system_history_user() {
        let call = ProviderCall {
            model: "deepseek-chat".into(),
            prompt: "solve x+1=2".into(),
            system_prompt: Some("You are Jeevi.".into()),
            history: Some("Human: hi\nJeevi: hello".into()),
            stream: false,
            web_access: false,
        };
        let req = DeepseekProvider::to_chat_request(&call);
        assert_eq!(req.messages.len(), 3);
        assert_eq!(req.messages[0].role, "system");
        assert!(req.messages[1].content.starts_with("Conversation so far:"));
        assert_eq!(req.messages[2].content, "solve x+1=2");
    }

    #[tokio::test]
    async fn generate_before_initialize_fails() {
        let provider = DeepseekProvider::new(DeepseekConfig {
            api_key: Some("k".into()),
            ..Default::default()
        });
        let err = provider
            .generate(ProviderCall::text("deepseek-chat", "q"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not initialized"));
    }

    #[tokio::test]
    async fn generate_after_close_fails() {
        let server = MockServer::start().await;
        let provider = provider(&server.uri()).await;
        provider.close().await;

        let err = provider
            .generate(ProviderCall::text("deepseek-chat", "q"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not initialized"));
    }

    #[tokio::test]
    async fn generate_round_trips() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("x = 1")))
            .mount(&server)
            .await;

        let provider = provider(&server.uri()).await;
        let text = provider
            .generate(ProviderCall::text("deepseek-chat", "solve x+1=2"))
            .await
            .unwrap();
        assert_eq!(text, "x = 1");
    }

    #[tokio::test]
    async fn health_reflects_session_state() {
        let server = MockServer::start().await;
        let provider = provider(&server.uri()).await;
        assert_eq!(provider.health_check().await.unwrap(), HealthStatus::Healthy);

        provider.close().await;
        assert!(matches!(
            provider.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let provider = DeepseekProvider::new(DeepseekConfig {
            api_key: Some("test-key".into()),
            ..Default::default()
        });
        provider.initialize().await.unwrap();
        provider.initialize().await.unwrap();
        assert_eq!(provider.health_check().await.unwrap(), HealthStatus::Healthy);
    }
}
