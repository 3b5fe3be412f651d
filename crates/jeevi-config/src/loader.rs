// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./jeevi.toml` > `~/.config/jeevi/jeevi.toml` > `/etc/jeevi/jeevi.toml`
//! with environment variable overrides via `JEEVI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::JeeviConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/jeevi/jeevi.toml` (system-wide)
/// 3. `~/.config/jeevi/jeevi.toml` (user XDG config)
/// 4. `./jeevi.toml` (local directory)
/// 5. `JEEVI_*` environment variables
pub fn load_config() -> Result<JeeviConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(JeeviConfig::default()))
        .merge(Toml::file("/etc/jeevi/jeevi.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("jeevi/jeevi.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("jeevi.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and for callers that carry their own TOML.
pub fn load_config_from_str(toml_content: &str) -> Result<JeeviConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(JeeviConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<JeeviConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(JeeviConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `JEEVI_DISCORD_BOT_TOKEN` must map to
/// `discord.bot_token`, not `discord.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("JEEVI_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: JEEVI_DISCORD_BOT_TOKEN -> "discord_bot_token"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("history_", "history.", 1)
            .replacen("discord_", "discord.", 1)
            .replacen("editee_", "editee.", 1)
            .replacen("deepseek_", "deepseek.", 1)
            .replacen("refine_", "refine.", 1)
            .replacen("heartbeat_", "heartbeat.", 1);
        mapped.into()
    })
}
