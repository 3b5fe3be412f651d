// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-target answer generation.
//!
//! One strategy per [`ProviderTarget`]: mathematical queries split
//! between DeepSeek and the general path by a lexical check,
//! programming queries run the refinement loop, realtime queries take
//! the streaming web-augmented path, everything else is a plain
//! general call with system prompt and recency-window history.
//!
//! This is the single downgrade point of the pipeline: provider
//! failures here become [`Reply::Degraded`] text, never errors, so a
//! failed generation still lands in the transcript.

use std::sync::Arc;

use jeevi_core::{ProviderCall, Reply, TextProvider, Transcript};
use jeevi_refine::RefinementLoop;
use jeevi_router::{is_mathematical, ProviderTarget};
use tracing::error;

/// Model names used by the generation strategies.
#[derive(Debug, Clone)]
pub struct GeneratorModels {
    /// General conversation model on the gateway (e.g. "gpt4").
    pub general: String,
    /// Real-time model on the gateway (e.g. "gemini").
    pub realtime: String,
    /// DeepSeek math-capable chat model.
    pub chat: String,
}

/// Turns a routed query into a [`Reply`].
pub struct ResponseGenerator {
    general: Arc<dyn TextProvider>,
    deepseek: Arc<dyn TextProvider>,
    refinement: RefinementLoop,
    models: GeneratorModels,
    assistant_name: String,
    developer: String,
}

impl ResponseGenerator {
    pub fn new(
        general: Arc<dyn TextProvider>,
        deepseek: Arc<dyn TextProvider>,
        refinement: RefinementLoop,
        models: GeneratorModels,
        assistant_name: impl Into<String>,
        developer: impl Into<String>,
    ) -> Self {
        Self {
            general,
            deepseek,
            refinement,
            models,
            assistant_name: assistant_name.into(),
            developer: developer.into(),
        }
    }

    /// Generate an answer for `query` on the routed `target`.
    pub async fn generate(
        &self,
        query: &str,
        target: ProviderTarget,
        transcript: &Transcript,
    ) -> Reply {
        match target {
            ProviderTarget::DeepseekChat => {
                if is_mathematical(query) {
                    self.answered_or_degraded(
                        self.deepseek
                            .generate(ProviderCall::text(&self.models.chat, query))
                            .await,
                    )
                } else {
                    self.general_call(query, &self.models.general, transcript, false, false)
                        .await
                }
            }
            ProviderTarget::Coder => self.refinement.refine(query).await,
            ProviderTarget::Gemini => {
                // Live queries answer from the web, not the thread; no
                // history is sent.
                self.general_call(query, &self.models.realtime, &Transcript::new(), true, true)
                    .await
            }
            ProviderTarget::General => {
                self.general_call(query, &self.models.general, transcript, false, false)
                    .await
            }
        }
    }

    async fn general_call(
        &self,
        query: &str,
        model: &str,
        transcript: &Transcript,
        stream: bool,
        web_access: bool,
    ) -> Reply {
        let call = ProviderCall {
            model: model.to_string(),
            prompt: query.to_string(),
            system_prompt: Some(self.system_prompt()),
            history: self.render_history(transcript),
            stream,
            web_access,
        };
        self.answered_or_degraded(self.general.generate(call).await)
    }

    fn answered_or_degraded(&self, result: Result<String, jeevi_core::JeeviError>) -> Reply {
        match result {
            Ok(text) => Reply::Answered(text),
            Err(e) => {
                error!(error = %e, "answer generation failed");
                Reply::Degraded(format!("An error occurred: {e}. Please try again."))
            }
        }
    }

    /// Fixed identity prompt naming assistant and developer.
    fn system_prompt(&self) -> String {
        format!(
            "You are {}, developed by {}, an advanced AI assistant designed \
             to handle diverse topics. Respond to the user's query with \
             accurate and helpful information.",
            self.assistant_name, self.developer
        )
    }

    /// Renders the recency window as `Human:`/`<name>:` line pairs.
    ///
    /// `None` when the transcript is empty, so a first turn carries no
    /// history block at all.
    fn render_history(&self, transcript: &Transcript) -> Option<String> {
        if transcript.is_empty() {
            return None;
        }
        let rendered = transcript
            .recent()
            .iter()
            .map(|turn| {
                format!(
                    "Human: {}\n{}: {}",
                    turn.user, self.assistant_name, turn.assistant
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(rendered)
    }
}
