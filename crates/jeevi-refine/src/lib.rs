// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded generator/reviewer code refinement.
//!
//! Programming queries are answered by an iterative loop: a coder
//! model drafts code, a reviewer model critiques it, and the critique
//! seeds the next draft. The loop ends when the reviewer declares the
//! code complete ([`LoopState::Converged`]) or the iteration bound is
//! hit ([`LoopState::Exhausted`]), in which case one final generation
//! is made from the accumulated state without another review.
//!
//! Provider failures never escape as errors: the loop short-circuits
//! to a [`Reply::Degraded`] so the conversation (and the transcript)
//! continues.

pub mod state;

pub use state::{LoopState, RefinementState};

use std::sync::Arc;

use jeevi_core::{ProviderCall, Reply, TextProvider};
use tracing::{debug, error};

/// Drives the refinement loop over a generator and a reviewer provider.
pub struct RefinementLoop {
    generator: Arc<dyn TextProvider>,
    reviewer: Arc<dyn TextProvider>,
    generator_model: String,
    reviewer_model: String,
    assistant_name: String,
    max_iterations: u32,
}

impl RefinementLoop {
    pub fn new(
        generator: Arc<dyn TextProvider>,
        reviewer: Arc<dyn TextProvider>,
        generator_model: impl Into<String>,
        reviewer_model: impl Into<String>,
        assistant_name: impl Into<String>,
        max_iterations: u32,
    ) -> Self {
        Self {
            generator,
            reviewer,
            generator_model: generator_model.into(),
            reviewer_model: reviewer_model.into(),
            assistant_name: assistant_name.into(),
            max_iterations,
        }
    }

    /// Refine an answer to `query`.
    ///
    /// Worst case: `max_iterations + 1` generator calls and
    /// `max_iterations` reviewer calls. Best case: one of each.
    pub async fn refine(&self, query: &str) -> Reply {
        let mut state = RefinementState::initial(query);

        while state.iteration < self.max_iterations {
            let draft_prompt = format!(
                "{}, generate or optimize the code.\n\
                 Human Query: {}\n\
                 Previous Code (if any): {}\n\
                 Response:",
                self.assistant_name, state.query, state.code
            );
            let draft = match self
                .generator
                .generate(ProviderCall::text(&self.generator_model, draft_prompt))
                .await
            {
                Ok(draft) => draft,
                Err(e) => {
                    error!(error = %e, iteration = state.iteration, "code generation failed");
                    return Reply::Degraded(format!(
                        "An error occurred while processing your request: {e}"
                    ));
                }
            };

            let review_prompt = format!(
                "Analyze the code and suggest improvements. \
                 Respond with 'COMPLETE' if optimal.\n\
                 User Query: {}\n\
                 Code: {draft}\n\
                 Response:",
                state.query
            );
            let review = match self
                .reviewer
                .generate(ProviderCall::text(&self.reviewer_model, review_prompt))
                .await
            {
                Ok(review) => review,
                Err(e) => {
                    error!(error = %e, iteration = state.iteration, "code review failed");
                    return Reply::Degraded(format!(
                        "An error occurred while processing your request: {e}"
                    ));
                }
            };

            match state.advance(&review, draft, self.max_iterations) {
                LoopState::Converged(code) => {
                    debug!(iteration = state.iteration, "reviewer accepted code");
                    return Reply::Answered(code);
                }
                LoopState::Iterating(next) | LoopState::Exhausted(next) => state = next,
            }
        }

        // Iteration budget spent: one last generation from the
        // accumulated critique, convergence not re-checked.
        let final_prompt = format!(
            "Generate the final, optimized code.\nQuery: {}\nCode: {}",
            state.query, state.code
        );
        match self
            .generator
            .generate(ProviderCall::text(&self.generator_model, final_prompt))
            .await
        {
            Ok(code) => Reply::Answered(code),
            Err(e) => {
                error!(error = %e, "final code generation failed");
                Reply::Degraded(format!(
                    "An error occurred while generating the final response: {e}"
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeevi_test_utils::MockProvider;

    fn refinement_loop(
        generator: &Arc<MockProvider>,
        reviewer: &Arc<MockProvider>,
        max_iterations: u32,
    ) -> RefinementLoop {
        RefinementLoop::new(
            generator.clone() as Arc<dyn TextProvider>,
            reviewer.clone() as Arc<dyn TextProvider>,
            "deepseek-coder",
            "claude",
            "Peru Leni Jeevi",
            max_iterations,
        )
    }

    #[tokio::test]
    async fn converges_on_first_review() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_response("fn main() {}").await;
        reviewer.push_response("COMPLETE").await;

        let reply = refinement_loop(&generator, &reviewer, 5)
            .refine("write main")
            .await;

        assert_eq!(reply, Reply::Answered("fn main() {}".into()));
        assert_eq!(generator.call_count().await, 1);
        assert_eq!(reviewer.call_count().await, 1);
    }

    #[tokio::test]
    async fn complete_is_matched_case_insensitively() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_response("code").await;
        reviewer.push_response("Looks Complete to me.").await;

        let reply = refinement_loop(&generator, &reviewer, 5)
            .refine("q")
            .await;
        assert_eq!(reply, Reply::Answered("code".into()));
    }

    #[tokio::test]
    async fn critique_seeds_the_next_draft() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_response("draft one").await;
        reviewer.push_response("add error handling").await;
        generator.push_response("draft two").await;
        reviewer.push_response("COMPLETE").await;

        let reply = refinement_loop(&generator, &reviewer, 5)
            .refine("write a parser")
            .await;

        assert_eq!(reply, Reply::Answered("draft two".into()));
        assert_eq!(generator.call_count().await, 2);
        assert_eq!(reviewer.call_count().await, 2);

        // Second draft prompt carries the critique and the prior draft.
        let second = &generator.calls().await[1];
        assert!(second.prompt.contains("add error handling"));
        assert!(second.prompt.contains("draft one"));
    }

    #[tokio::test]
    async fn exhaustion_makes_one_final_generation() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        for i in 0..2 {
            generator.push_response(format!("draft {i}")).await;
            reviewer.push_response("never satisfied").await;
        }
        generator.push_response("final code").await;

        let reply = refinement_loop(&generator, &reviewer, 2)
            .refine("q")
            .await;

        assert_eq!(reply, Reply::Answered("final code".into()));
        // max_iterations + 1 generator calls, max_iterations reviews.
        assert_eq!(generator.call_count().await, 3);
        assert_eq!(reviewer.call_count().await, 2);

        let final_call = &generator.calls().await[2];
        assert!(final_call.prompt.starts_with("Generate the final, optimized code."));
        assert!(final_call.prompt.contains("draft 1"));
    }

    #[tokio::test]
    async fn generator_failure_degrades() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_failure("timeout").await;

        let reply = refinement_loop(&generator, &reviewer, 5)
            .refine("q")
            .await;

        assert!(reply.is_degraded());
        assert!(reply.text().contains("timeout"));
        assert_eq!(reviewer.call_count().await, 0);
    }

    #[tokio::test]
    async fn reviewer_failure_degrades() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_response("code").await;
        reviewer.push_failure("rate limited").await;

        let reply = refinement_loop(&generator, &reviewer, 5)
            .refine("q")
            .await;

        assert!(reply.is_degraded());
        assert!(reply.text().contains("rate limited"));
        assert_eq!(generator.call_count().await, 1);
    }

    #[tokio::test]
    async fn final_generation_failure_degrades() {
        let generator = Arc::new(MockProvider::new());
        let reviewer = Arc::new(MockProvider::new());
        generator.push_response("draft").await;
        reviewer.push_response("keep going").await;
        generator.push_failure("connection refused").await;

        let reply = refinement_loop(&generator, &reviewer, 1)
            .refine("q")
            .await;

        assert!(reply.is_degraded());
        assert!(reply.text().contains("generating the final response"));
    }
}
