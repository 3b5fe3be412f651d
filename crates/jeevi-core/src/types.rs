// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Jeevi workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Number of trailing turns read back into generation context.
///
/// Transcripts have no stored upper bound; only this window is ever
/// rendered into a prompt.
pub const RECENCY_WINDOW: usize = 5;

/// One user/assistant exchange.
///
/// A turn with either field empty is never persisted; it is dropped
/// with a warning at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }

    /// A turn is persistable only when both sides are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.user.is_empty() && !self.assistant.is_empty()
    }
}

/// Ordered conversation transcript for one conversation id.
///
/// Insertion order defines recency; append-only within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The trailing [`RECENCY_WINDOW`] turns, oldest first.
    pub fn recent(&self) -> &[Turn] {
        let start = self.turns.len().saturating_sub(RECENCY_WINDOW);
        &self.turns[start..]
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

/// A single generation request against a [`TextProvider`](crate::TextProvider).
///
/// Mirrors the provider boundary: prompt plus optional system prompt,
/// rendered history, and the stream/web-access flags that only some
/// backends honor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCall {
    /// Backend-specific model identifier (e.g. "gpt4", "deepseek_code").
    pub model: String,
    pub prompt: String,
    pub system_prompt: Option<String>,
    /// Pre-rendered recency-window history, if the call carries context.
    pub history: Option<String>,
    pub stream: bool,
    pub web_access: bool,
}

impl ProviderCall {
    /// A plain single-shot call with no system prompt or history.
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_prompt: None,
            history: None,
            stream: false,
            web_access: false,
        }
    }
}

/// Outcome of answer generation.
///
/// Provider failures during final generation are converted into
/// `Degraded` text rather than errors, so the conversation continues
/// and the failure itself becomes part of transcript continuity.
/// Both arms carry text; callers cannot forget to persist a degraded
/// turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A normal provider answer.
    Answered(String),
    /// A user-facing error string standing in for a failed generation.
    Degraded(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Answered(t) | Reply::Degraded(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Reply::Answered(t) | Reply::Degraded(t) => t,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Reply::Degraded(_))
    }
}

/// Identifies the kind of adapter behind a [`PluginAdapter`](crate::PluginAdapter).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Channel,
    Provider,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}
