// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification and provider routing for the Jeevi agent.
//!
//! This crate provides:
//! - [`Classifier`]: LLM-backed category classification of user queries
//! - [`route`]: total mapping from category to provider target
//! - [`is_mathematical`]: lexical math detector used to split the
//!   Mathematical category between backends
//!
//! Classification runs before any answer generation, selecting which
//! provider and model family handle the query. Classification failures
//! propagate: no downstream call is made and nothing is persisted for
//! a query whose category is unknown.

pub mod classifier;
pub mod heuristic;
pub mod router;

pub use classifier::{Category, Classifier};
pub use heuristic::is_mathematical;
pub use router::{route, ProviderTarget};
