// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Jeevi agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Jeevi configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to
/// sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JeeviConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Transcript persistence settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Discord integration settings.
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Editee multi-model gateway settings.
    #[serde(default)]
    pub editee: EditeeConfig,

    /// DeepSeek API settings.
    #[serde(default)]
    pub deepseek: DeepseekConfig,

    /// Code refinement loop settings.
    #[serde(default)]
    pub refine: RefineConfig,

    /// Keep-alive heartbeat settings.
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant; also the assistant line prefix in
    /// transcript files.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Developer attribution embedded in the identity system prompt.
    #[serde(default = "default_developer")]
    pub developer: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            developer: default_developer(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "Peru Leni Jeevi".to_string()
}

fn default_developer() -> String {
    "Likhith Sai (likhithsai2580 on GitHub)".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Transcript persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Directory holding per-conversation transcript files.
    #[serde(default = "default_history_dir")]
    pub dir: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: default_history_dir(),
        }
    }
}

fn default_history_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("jeevi").join("chat_history"))
        .unwrap_or_else(|| std::path::PathBuf::from("chat_history"))
        .to_string_lossy()
        .into_owned()
}

/// Discord integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscordConfig {
    /// Discord bot token. `None` requires the `DISCORD_BOT_TOKEN`
    /// environment variable.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Path to the JSON document holding the monitored forum channel id.
    #[serde(default = "default_monitor_path")]
    pub monitor_path: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            monitor_path: default_monitor_path(),
        }
    }
}

fn default_monitor_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("jeevi").join("forum_channel_id.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("forum_channel_id.json"))
        .to_string_lossy()
        .into_owned()
}

/// Editee multi-model gateway configuration.
///
/// Editee fronts several hosted models behind one endpoint; the model
/// field of each call selects among them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditeeConfig {
    /// Endpoint URL for generation calls.
    #[serde(default = "default_editee_base_url")]
    pub base_url: String,

    /// Model used for classification and the general conversation path.
    #[serde(default = "default_general_model")]
    pub general_model: String,

    /// Model used to review code in the refinement loop.
    #[serde(default = "default_reviewer_model")]
    pub reviewer_model: String,

    /// Model used for real-time/web-augmented queries.
    #[serde(default = "default_realtime_model")]
    pub realtime_model: String,
}

impl Default for EditeeConfig {
    fn default() -> Self {
        Self {
            base_url: default_editee_base_url(),
            general_model: default_general_model(),
            reviewer_model: default_reviewer_model(),
            realtime_model: default_realtime_model(),
        }
    }
}

fn default_editee_base_url() -> String {
    "https://editee.com/submit/chatgptfree".to_string()
}

fn default_general_model() -> String {
    "gpt4".to_string()
}

fn default_reviewer_model() -> String {
    "claude".to_string()
}

fn default_realtime_model() -> String {
    "gemini".to_string()
}

/// DeepSeek API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeepseekConfig {
    /// DeepSeek API key. `None` requires the `DEEPSEEK_API_KEY`
    /// environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the DeepSeek API.
    #[serde(default = "default_deepseek_base_url")]
    pub base_url: String,

    /// Model identifier for the math-capable chat model.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Model identifier for the code-generation model.
    #[serde(default = "default_coder_model")]
    pub coder_model: String,
}

impl Default for DeepseekConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_deepseek_base_url(),
            chat_model: default_chat_model(),
            coder_model: default_coder_model(),
        }
    }
}

fn default_deepseek_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_chat_model() -> String {
    "deepseek-chat".to_string()
}

fn default_coder_model() -> String {
    "deepseek-coder".to_string()
}

/// Code refinement loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RefineConfig {
    /// Iteration cap for the generate/review loop. When reached, one
    /// final generation call is issued and its output returned as-is.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_max_iterations() -> u32 {
    5
}

/// Keep-alive heartbeat configuration.
///
/// The heartbeat is a periodic no-op log line; it touches no shared state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeartbeatConfig {
    /// Enable the heartbeat task.
    #[serde(default = "default_heartbeat_enabled")]
    pub enabled: bool,

    /// Heartbeat interval in seconds.
    #[serde(default = "default_heartbeat_interval_secs")]
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: default_heartbeat_enabled(),
            interval_secs: default_heartbeat_interval_secs(),
        }
    }
}

fn default_heartbeat_enabled() -> bool {
    true
}

fn default_heartbeat_interval_secs() -> u64 {
    300 // 5 minutes
}
