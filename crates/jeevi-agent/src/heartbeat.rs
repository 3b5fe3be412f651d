// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Liveness heartbeat.
//!
//! A periodic task that logs a tick on a fixed interval and nothing
//! else. It touches no shared state; hosting platforms that recycle
//! idle processes see a live log stream.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Runs the heartbeat until `token` is cancelled.
pub async fn run_heartbeat(interval_secs: u64, token: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    // The first tick fires immediately; skip it so ticks land on the
    // configured cadence.
    interval.tick().await;

    info!(interval_secs, "heartbeat started");
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                debug!("heartbeat stopped");
                return;
            }
            _ = interval.tick() => {
                debug!("heartbeat tick");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn heartbeat_stops_on_cancellation() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_heartbeat(300, token.clone()));

        tokio::time::advance(Duration::from_secs(900)).await;
        token.cancel();

        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_survives_many_ticks() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_heartbeat(1, token.clone()));

        tokio::time::advance(Duration::from_secs(3600)).await;
        assert!(!handle.is_finished());

        token.cancel();
        handle.await.unwrap();
    }
}
