// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Monitored forum channel persistence.
//!
//! The bot answers only in threads under one admin-chosen forum
//! channel. The choice is a tiny JSON document on disk, written by
//! the admin slash command and re-read on every inbound message so a
//! change takes effect without a restart.

use std::path::{Path, PathBuf};

use jeevi_core::JeeviError;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonitorDoc {
    forum_channel_id: u64,
}

fn io_error(e: std::io::Error) -> JeeviError {
    JeeviError::Channel {
        message: format!("failed to write monitor document: {e}"),
        source: Some(Box::new(e)),
    }
}

/// Reads and writes the monitored forum channel id.
#[derive(Debug, Clone)]
pub struct ChannelMonitor {
    path: PathBuf,
}

impl ChannelMonitor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the monitored channel id.
    ///
    /// A missing file means no channel has been configured yet; a
    /// malformed file is treated the same way, with a warning, so a
    /// corrupt document never wedges the bot.
    pub async fn load(&self) -> Result<Option<u64>, JeeviError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(JeeviError::Channel {
                    message: format!("failed to read monitor document: {e}"),
                    source: Some(Box::new(e)),
                });
            }
        };

        match serde_json::from_str::<MonitorDoc>(&content) {
            Ok(doc) => Ok(Some(doc.forum_channel_id)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed monitor document");
                Ok(None)
            }
        }
    }

    /// Persists the monitored channel id, creating parent directories
    /// as needed.
    pub async fn save(&self, forum_channel_id: u64) -> Result<(), JeeviError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        let doc = MonitorDoc { forum_channel_id };
        let json = serde_json::to_string(&doc)
            .map_err(|e| JeeviError::Internal(format!("failed to encode monitor document: {e}")))?;
        tokio::fs::write(&self.path, json).await.map_err(io_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_means_unconfigured() {
        let tmp = tempfile::tempdir().unwrap();
        let monitor = ChannelMonitor::new(tmp.path().join("forum_channel_id.json"));
        assert_eq!(monitor.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let monitor = ChannelMonitor::new(tmp.path().join("forum_channel_id.json"));

        monitor.save(123456789).await.unwrap();
        assert_eq!(monitor.load().await.unwrap(), Some(123456789));
    }

    #[tokio::test]
    async fn save_overwrites_previous_choice() {
        let tmp = tempfile::tempdir().unwrap();
        let monitor = ChannelMonitor::new(tmp.path().join("forum_channel_id.json"));

        monitor.save(1).await.unwrap();
        monitor.save(2).await.unwrap();
        assert_eq!(monitor.load().await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn malformed_document_reads_as_unconfigured() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("forum_channel_id.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let monitor = ChannelMonitor::new(path);
        assert_eq!(monitor.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let monitor = ChannelMonitor::new(tmp.path().join("nested/dir/forum_channel_id.json"));
        monitor.save(42).await.unwrap();
        assert_eq!(monitor.load().await.unwrap(), Some(42));
    }
}
