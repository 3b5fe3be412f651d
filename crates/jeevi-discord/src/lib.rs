// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discord channel adapter for the Jeevi agent.
//!
//! Connects to the Discord gateway via serenity, answers messages in
//! threads under the monitored forum channel, and delivers oversize
//! replies as file attachments. The monitored channel is chosen at
//! runtime through an admin slash command and persisted as a small
//! JSON document.

pub mod handler;
pub mod monitor;
pub mod reply;

use std::sync::Arc;

use async_trait::async_trait;
use jeevi_agent::Orchestrator;
use jeevi_config::model::DiscordConfig;
use jeevi_core::traits::PluginAdapter;
use jeevi_core::types::{AdapterType, HealthStatus};
use jeevi_core::JeeviError;
use serenity::all::{Client, GatewayIntents, Http};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::handler::Handler;
use crate::monitor::ChannelMonitor;

/// Discord channel adapter.
pub struct DiscordChannel {
    token: String,
    http: Arc<Http>,
    monitor: ChannelMonitor,
    orchestrator: Arc<Orchestrator>,
}

impl DiscordChannel {
    /// Creates a new Discord channel adapter.
    ///
    /// Token resolution order: config -> `DISCORD_BOT_TOKEN` env var
    /// -> error.
    pub fn new(
        config: &DiscordConfig,
        orchestrator: Arc<Orchestrator>,
    ) -> Result<Self, JeeviError> {
        let token = match config.bot_token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => token.to_string(),
            None => std::env::var("DISCORD_BOT_TOKEN").map_err(|_| {
                JeeviError::Config(
                    "Discord bot token not found: set discord.bot_token or DISCORD_BOT_TOKEN"
                        .to_string(),
                )
            })?,
        };

        Ok(Self {
            http: Arc::new(Http::new(&token)),
            token,
            monitor: ChannelMonitor::new(&config.monitor_path),
            orchestrator,
        })
    }

    /// Runs the gateway connection until `cancel` fires.
    pub async fn run(&self, cancel: CancellationToken) -> Result<(), JeeviError> {
        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let handler = Handler::new(self.orchestrator.clone(), self.monitor.clone());
        let mut client = Client::builder(&self.token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| JeeviError::Channel {
                message: format!("failed to build Discord client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let shard_manager = client.shard_manager.clone();

        tokio::select! {
            result = client.start() => result.map_err(|e| JeeviError::Channel {
                message: format!("Discord gateway connection failed: {e}"),
                source: Some(Box::new(e)),
            }),
            _ = cancel.cancelled() => {
                info!("stopping Discord gateway");
                shard_manager.shutdown_all().await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl PluginAdapter for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, JeeviError> {
        match self.http.get_current_user().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Discord API unreachable: {e}"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), JeeviError> {
        debug!("Discord channel shutting down");
        Ok(())
    }
}
