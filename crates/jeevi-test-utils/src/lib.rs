// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic test doubles for the Jeevi workspace.
//!
//! `MockProvider` implements [`jeevi_core::TextProvider`] with
//! pre-scripted responses, enabling fast, CI-runnable tests of the
//! classifier, refinement loop, and orchestrator without network calls.

pub mod mock_provider;

pub use mock_provider::MockProvider;
