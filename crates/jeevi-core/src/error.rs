// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Jeevi agent.

use thiserror::Error;

/// The primary error type used across all Jeevi crates.
#[derive(Debug, Error)]
pub enum JeeviError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transcript persistence errors (file I/O on load/save).
    ///
    /// These are the only errors allowed to escape the orchestrator as
    /// true failures; all provider errors are downgraded to text before
    /// they reach the transcript.
    #[error("history error: {source}")]
    History {
        #[source]
        source: std::io::Error,
    },

    /// LLM provider errors (HTTP failure, bad response body, model not found).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chat platform errors (gateway connection, send failure, rate limiting).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl JeeviError {
    /// Shorthand for a provider error with no underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        JeeviError::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a channel error with no underlying source.
    pub fn channel(message: impl Into<String>) -> Self {
        JeeviError::Channel {
            message: message.into(),
            source: None,
        }
    }
}

impl From<std::io::Error> for JeeviError {
    fn from(source: std::io::Error) -> Self {
        JeeviError::History { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_display() {
        let config = JeeviError::Config("bad key".into());
        assert!(config.to_string().contains("configuration error"));

        let history = JeeviError::History {
            source: std::io::Error::other("disk full"),
        };
        assert!(history.to_string().contains("disk full"));

        let provider = JeeviError::provider("model not found");
        assert!(provider.to_string().contains("model not found"));
    }

    #[test]
    fn io_error_converts_to_history() {
        let err: JeeviError = std::io::Error::other("boom").into();
        assert!(matches!(err, JeeviError::History { .. }));
    }
}
