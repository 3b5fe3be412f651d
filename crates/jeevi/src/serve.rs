// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `jeevi serve` command implementation.
//!
//! Wires the full agent: transcript store, Editee and DeepSeek
//! providers, classifier, refinement loop, orchestrator, and the
//! Discord gateway. Runs until SIGINT/SIGTERM, then closes the
//! DeepSeek session on the way out.

use std::sync::Arc;

use jeevi_agent::generator::GeneratorModels;
use jeevi_agent::{heartbeat, shutdown, Orchestrator, ResponseGenerator};
use jeevi_config::JeeviConfig;
use jeevi_core::{JeeviError, TextProvider};
use jeevi_deepseek::DeepseekProvider;
use jeevi_discord::DiscordChannel;
use jeevi_editee::EditeeProvider;
use jeevi_history::HistoryStore;
use jeevi_refine::RefinementLoop;
use jeevi_router::Classifier;
use tracing::{error, info};

/// Runs the `jeevi serve` command.
pub async fn run_serve(config: JeeviConfig) -> Result<(), JeeviError> {
    init_tracing(&config.agent.log_level);

    info!("starting jeevi serve");

    let store = HistoryStore::new(&config.history.dir, &config.agent.name).await?;

    let editee: Arc<dyn TextProvider> = Arc::new(EditeeProvider::new(&config.editee)?);

    let deepseek = Arc::new(DeepseekProvider::new(config.deepseek.clone()));
    deepseek.initialize().await.map_err(|e| {
        error!(error = %e, "failed to initialize DeepSeek provider");
        eprintln!(
            "error: DeepSeek API key required. Set via config (deepseek.api_key) \
             or the DEEPSEEK_API_KEY environment variable."
        );
        e
    })?;

    let classifier = Classifier::new(editee.clone(), &config.editee.general_model);
    let refinement = RefinementLoop::new(
        deepseek.clone(),
        editee.clone(),
        &config.deepseek.coder_model,
        &config.editee.reviewer_model,
        &config.agent.name,
        config.refine.max_iterations,
    );
    let generator = ResponseGenerator::new(
        editee.clone(),
        deepseek.clone(),
        refinement,
        GeneratorModels {
            general: config.editee.general_model.clone(),
            realtime: config.editee.realtime_model.clone(),
            chat: config.deepseek.chat_model.clone(),
        },
        &config.agent.name,
        &config.agent.developer,
    );
    let orchestrator = Arc::new(Orchestrator::new(
        store,
        classifier,
        generator,
        &config.agent.name,
    ));

    let discord = DiscordChannel::new(&config.discord, orchestrator).map_err(|e| {
        error!(error = %e, "failed to initialize Discord channel");
        eprintln!(
            "error: Discord bot token required. Set via config (discord.bot_token) \
             or the DISCORD_BOT_TOKEN environment variable."
        );
        e
    })?;

    let cancel = shutdown::install_signal_handler();

    let heartbeat_handle = if config.heartbeat.enabled {
        Some(tokio::spawn(heartbeat::run_heartbeat(
            config.heartbeat.interval_secs,
            cancel.clone(),
        )))
    } else {
        info!("heartbeat disabled by configuration");
        None
    };

    let result = discord.run(cancel.clone()).await;

    // Stop background tasks and close provider sessions regardless of
    // how the gateway loop ended.
    cancel.cancel();
    if let Some(handle) = heartbeat_handle {
        let _ = handle.await;
    }
    deepseek.close().await;

    info!("jeevi serve stopped");
    result
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jeevi={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
