// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-query pipeline.

use jeevi_core::{JeeviError, Turn};
use jeevi_history::HistoryStore;
use jeevi_router::{route, Classifier};
use tracing::{info, warn};

use crate::generator::ResponseGenerator;

/// Runs one inbound query end to end.
///
/// Steps: load transcript, classify, route, generate, append turn,
/// persist, return the name-prefixed response. Classification and
/// persistence failures propagate (a query we could not classify
/// writes nothing); generation failures arrive as degraded replies
/// and ARE persisted, so the failure becomes part of the
/// conversation.
pub struct Orchestrator {
    store: HistoryStore,
    classifier: Classifier,
    generator: ResponseGenerator,
    assistant_name: String,
}

impl Orchestrator {
    pub fn new(
        store: HistoryStore,
        classifier: Classifier,
        generator: ResponseGenerator,
        assistant_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            classifier,
            generator,
            assistant_name: assistant_name.into(),
        }
    }

    /// Handle one query in the conversation `conversation_id`.
    pub async fn handle_query(
        &self,
        query: &str,
        conversation_id: &str,
    ) -> Result<String, JeeviError> {
        let mut transcript = self.store.load(conversation_id).await?;

        let category = self.classifier.classify(query).await?;
        let target = route(category);
        info!(conversation_id, category = %category, "query routed");

        let reply = self.generator.generate(query, target, &transcript).await;
        if reply.is_degraded() {
            warn!(conversation_id, "persisting degraded reply");
        }

        transcript.push(Turn::new(query, reply.text()));
        self.store.save(conversation_id, &transcript).await?;

        Ok(format!("{}: {}", self.assistant_name, reply.into_text()))
    }
}
