// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query orchestration and agent lifecycle.
//!
//! The [`Orchestrator`] runs one inbound query through the full
//! pipeline: load transcript, classify, route, generate, persist,
//! respond. [`ResponseGenerator`] owns the per-target generation
//! strategies; [`heartbeat`] and [`shutdown`] cover the process
//! lifecycle around the loop.

pub mod generator;
pub mod heartbeat;
pub mod orchestrator;
pub mod shutdown;

pub use generator::ResponseGenerator;
pub use orchestrator::Orchestrator;
