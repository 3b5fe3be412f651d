// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and positive iteration counts.

use thiserror::Error;

use crate::model::JeeviConfig;

/// A configuration error: either a parse/merge failure from Figment or
/// a semantic validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("{message}")]
    Validation { message: String },
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &JeeviConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if config.history.dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "history.dir must not be empty".to_string(),
        });
    }

    if config.editee.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "editee.base_url must not be empty".to_string(),
        });
    }

    if config.deepseek.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "deepseek.base_url must not be empty".to_string(),
        });
    }

    if config.refine.max_iterations == 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "refine.max_iterations must be at least 1, got {}",
                config.refine.max_iterations
            ),
        });
    }

    if config.heartbeat.interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "heartbeat.interval_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Print collected configuration errors to stderr, one per line.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("config error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = JeeviConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_agent_name_rejected() {
        let mut config = JeeviConfig::default();
        config.agent.name = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("agent.name")));
    }

    #[test]
    fn zero_max_iterations_rejected() {
        let mut config = JeeviConfig::default();
        config.refine.max_iterations = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("max_iterations")));
    }

    #[test]
    fn multiple_errors_are_collected() {
        let mut config = JeeviConfig::default();
        config.agent.name = String::new();
        config.history.dir = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
