// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway event handling.
//!
//! Messages are answered only inside threads whose parent is the
//! monitored forum channel; everything else is ignored silently. Two
//! global slash commands are registered on ready: an admin-only
//! `set_forum_channel` and a plain `start` hint.

use std::sync::Arc;

use jeevi_agent::Orchestrator;
use serenity::all::{
    Command, CommandDataOptionValue, CommandOptionType, Context, CreateAttachment, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EventHandler, Interaction, Message, Permissions, Ready,
};
use serenity::async_trait;
use tracing::{debug, error, info, warn};

use crate::monitor::ChannelMonitor;
use crate::reply::{self, Delivery};

pub struct Handler {
    orchestrator: Arc<Orchestrator>,
    monitor: ChannelMonitor,
}

impl Handler {
    pub fn new(orchestrator: Arc<Orchestrator>, monitor: ChannelMonitor) -> Self {
        Self {
            orchestrator,
            monitor,
        }
    }

    /// True when `msg` sits in a thread under the monitored forum.
    ///
    /// The monitor document is re-read per message so an admin change
    /// takes effect without a restart.
    async fn in_monitored_thread(&self, ctx: &Context, msg: &Message) -> bool {
        let forum_id = match self.monitor.load().await {
            Ok(Some(id)) => id,
            Ok(None) => return false,
            Err(e) => {
                error!(error = %e, "failed to read monitor document");
                return false;
            }
        };

        let channel = match msg.channel(ctx).await {
            Ok(channel) => channel,
            Err(e) => {
                warn!(error = %e, channel_id = msg.channel_id.get(), "failed to resolve channel");
                return false;
            }
        };

        channel
            .guild()
            .filter(|gc| gc.thread_metadata.is_some())
            .and_then(|gc| gc.parent_id)
            .is_some_and(|parent| parent.get() == forum_id)
    }

    async fn deliver(&self, ctx: &Context, msg: &Message, text: &str) {
        match reply::delivery_for(text, msg.id.get()) {
            Delivery::Inline => {
                if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
                    error!(error = %e, "failed to send reply");
                }
            }
            Delivery::Attachment { filename } => {
                let path = match reply::write_attachment(text, &filename).await {
                    Ok(path) => path,
                    Err(e) => {
                        error!(error = %e, "failed to write attachment file");
                        return;
                    }
                };
                match CreateAttachment::path(&path).await {
                    Ok(attachment) => {
                        let message = CreateMessage::new()
                            .content("The response was too long, so it is attached as a file.")
                            .add_file(attachment);
                        if let Err(e) = msg.channel_id.send_message(&ctx.http, message).await {
                            error!(error = %e, "failed to send attachment reply");
                        }
                    }
                    Err(e) => error!(error = %e, "failed to read attachment file"),
                }
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    warn!(error = %e, path = %path.display(), "failed to delete temp file");
                }
            }
        }
    }

    async fn handle_set_forum_channel(
        &self,
        command: &serenity::all::CommandInteraction,
    ) -> String {
        let channel_id = command.data.options.first().and_then(|opt| match opt.value {
            CommandDataOptionValue::Channel(id) => Some(id.get()),
            _ => None,
        });

        match channel_id {
            Some(id) => match self.monitor.save(id).await {
                Ok(()) => {
                    info!(forum_channel_id = id, "monitored forum channel updated");
                    format!("Monitoring forum channel <#{id}>.")
                }
                Err(e) => {
                    error!(error = %e, "failed to persist monitored channel");
                    "Failed to save the channel choice. Please try again.".to_string()
                }
            },
            None => "Please provide a channel.".to_string(),
        }
    }

    async fn handle_start(&self) -> String {
        match self.monitor.load().await {
            Ok(Some(id)) => format!(
                "Create a thread in <#{id}> and ask your question there; \
                 I answer every message in the thread."
            ),
            _ => "No forum channel is configured yet. An admin must run \
                  /set_forum_channel first."
                .to_string(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = ready.user.name, "Discord gateway connected");

        let commands = vec![
            CreateCommand::new("set_forum_channel")
                .description("Choose the forum channel the bot monitors")
                .default_member_permissions(Permissions::ADMINISTRATOR)
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "channel",
                        "Forum channel to monitor",
                    )
                    .required(true),
                ),
            CreateCommand::new("start").description("How to start a conversation"),
        ];

        if let Err(e) = Command::set_global_commands(&ctx.http, commands).await {
            error!(error = %e, "failed to register slash commands");
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if !self.in_monitored_thread(&ctx, &msg).await {
            return;
        }

        debug!(
            thread_id = msg.channel_id.get(),
            author = msg.author.name,
            "handling thread message"
        );

        let typing = msg.channel_id.start_typing(&ctx.http);
        let conversation_id = msg.channel_id.get().to_string();

        let response = self
            .orchestrator
            .handle_query(&msg.content, &conversation_id)
            .await;
        typing.stop();

        match response {
            Ok(text) => self.deliver(&ctx, &msg, &text).await,
            Err(e) => {
                error!(error = %e, thread_id = conversation_id, "query handling failed");
                let _ = msg
                    .channel_id
                    .say(&ctx.http, "Something went wrong. Please try again.")
                    .await;
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let content = match command.data.name.as_str() {
            "set_forum_channel" => self.handle_set_forum_channel(&command).await,
            "start" => self.handle_start().await,
            other => {
                warn!(command = other, "unknown slash command");
                return;
            }
        };

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(content),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            error!(error = %e, "failed to respond to slash command");
        }
    }
}
