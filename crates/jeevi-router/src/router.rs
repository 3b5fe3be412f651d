// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category-to-provider routing.

use crate::classifier::Category;

/// The provider path that will answer a query.
///
/// `DeepseekChat` and `Coder` ride the Deepseek API; `Gemini` and
/// `General` ride the Editee gateway with different models and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderTarget {
    /// Deepseek chat model, used for mathematical queries.
    DeepseekChat,
    /// Deepseek coder model behind the refinement loop.
    Coder,
    /// Realtime model with web access and streaming.
    Gemini,
    /// Default general-purpose model.
    General,
}

/// Total mapping from query category to provider target.
///
/// Pure and infallible: every category has exactly one target.
pub fn route(category: Category) -> ProviderTarget {
    match category {
        Category::Mathematical => ProviderTarget::DeepseekChat,
        Category::Programming => ProviderTarget::Coder,
        Category::Realtime => ProviderTarget::Gemini,
        Category::General => ProviderTarget::General,
    }
}
