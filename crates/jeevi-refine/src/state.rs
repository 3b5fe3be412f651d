// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Refinement loop state machine.

/// Accumulated loop state: the prompt seed for the next draft.
///
/// After the first iteration `query` holds the reviewer's critique,
/// not the user's original question; the original question is kept by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementState {
    /// Current prompt seed (user query, then reviewer critique).
    pub query: String,
    /// Most recent draft, empty before the first generation.
    pub code: String,
    /// Completed generate/review rounds.
    pub iteration: u32,
}

/// Where the loop stands after one generate/review round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Reviewer asked for changes; another round is allowed.
    Iterating(RefinementState),
    /// Reviewer accepted the draft; carries the accepted code.
    Converged(String),
    /// Reviewer asked for changes but the iteration budget is spent.
    Exhausted(RefinementState),
}

impl RefinementState {
    pub fn initial(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            code: String::new(),
            iteration: 0,
        }
    }

    /// Fold one review verdict into the state.
    ///
    /// A verdict containing "complete" (case-insensitive) converges
    /// with the draft as the answer. Otherwise the critique becomes
    /// the next seed and the iteration counter advances.
    pub fn advance(&self, review: &str, draft: String, max_iterations: u32) -> LoopState {
        if review.to_lowercase().contains("complete") {
            return LoopState::Converged(draft);
        }

        let next = RefinementState {
            query: review.to_string(),
            code: draft,
            iteration: self.iteration + 1,
        };
        if next.iteration >= max_iterations {
            LoopState::Exhausted(next)
        } else {
            LoopState::Iterating(next)
        }
    }
}
