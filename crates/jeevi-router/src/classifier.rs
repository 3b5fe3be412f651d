// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed query categorization.
//!
//! A cheap general-model pre-call decides which backend answers the
//! query. The provider's free-text verdict is matched by substring,
//! so "This is a Programming question." and "programming" both land
//! in the same category.

use std::sync::Arc;

use jeevi_core::{JeeviError, ProviderCall, TextProvider};
use strum::{Display, EnumString};
use tracing::debug;

/// Query categories mapped to provider backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Equations, proofs, numeric problems.
    Mathematical,
    /// Code generation, debugging, review.
    Programming,
    /// General knowledge and conversation.
    General,
    /// Current events, live data, anything needing fresh information.
    Realtime,
}

/// Classifies a user query into a [`Category`] with one provider call.
///
/// Errors from the provider propagate unchanged; a query that cannot
/// be classified is never answered or persisted.
pub struct Classifier {
    provider: Arc<dyn TextProvider>,
    model: String,
}

impl Classifier {
    pub fn new(provider: Arc<dyn TextProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Classify `query`, propagating provider failures.
    ///
    /// The verdict is lowercased and matched by substring with fixed
    /// priority: mathematical, then programming, then realtime. Any
    /// other verdict (including an empty one) falls back to
    /// [`Category::General`].
    pub async fn classify(&self, query: &str) -> Result<Category, JeeviError> {
        let prompt = format!(
            "Classify the following question into exactly one category: \
             mathematical, programming, realtime, or general.\n\
             Respond with only the category name.\n\n\
             Question: {query}"
        );

        let verdict = self
            .provider
            .generate(ProviderCall::text(&self.model, prompt))
            .await?;

        let category = Self::parse_verdict(&verdict);
        debug!(verdict = verdict.trim(), category = %category, "classified query");
        Ok(category)
    }

    fn parse_verdict(verdict: &str) -> Category {
        let lower = verdict.trim().to_lowercase();
        if lower.contains("mathematical") {
            Category::Mathematical
        } else if lower.contains("programming") {
            Category::Programming
        } else if lower.contains("realtime") {
            Category::Realtime
        } else {
            Category::General
        }
    }
}
