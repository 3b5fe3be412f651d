// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Jeevi agent.
//!
//! This crate provides the foundational trait definitions, error type,
//! and common types used throughout the Jeevi workspace. Provider and
//! channel adapters implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::JeeviError;
pub use types::{
    AdapterType, HealthStatus, ProviderCall, Reply, Transcript, Turn, RECENCY_WINDOW,
};

pub use traits::{PluginAdapter, TextProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_constructible() {
        let _config = JeeviError::Config("test".into());
        let _history = JeeviError::History {
            source: std::io::Error::other("test"),
        };
        let _provider = JeeviError::Provider {
            message: "test".into(),
            source: None,
        };
        let _channel = JeeviError::Channel {
            message: "test".into(),
            source: None,
        };
        let _internal = JeeviError::Internal("test".into());
    }

    #[test]
    fn trait_objects_are_usable() {
        // If either trait loses object safety, this stops compiling.
        fn _assert_plugin(_: &dyn PluginAdapter) {}
        fn _assert_provider(_: &dyn TextProvider) {}
    }
}
