// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Oversize reply handling.
//!
//! Discord caps messages at 2000 characters; replies over a
//! conservative inline limit are delivered as a text file attachment
//! instead of being truncated.

use std::path::PathBuf;

use jeevi_core::JeeviError;

/// Longest reply sent inline; anything over this becomes a file.
pub const INLINE_REPLY_LIMIT: usize = 1900;

/// How a reply should be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Inline,
    /// Deliver as an attachment named `response_<message_id>.txt`.
    Attachment { filename: String },
}

/// Decides delivery for a reply to the message `message_id`.
///
/// The limit counts characters, not bytes, matching how the reply was
/// measured upstream.
pub fn delivery_for(text: &str, message_id: u64) -> Delivery {
    if text.chars().count() <= INLINE_REPLY_LIMIT {
        Delivery::Inline
    } else {
        Delivery::Attachment {
            filename: format!("response_{message_id}.txt"),
        }
    }
}

/// Writes the reply to a temp file for attachment upload.
///
/// The caller deletes the file after the upload completes.
pub async fn write_attachment(text: &str, filename: &str) -> Result<PathBuf, JeeviError> {
    let path = std::env::temp_dir().join(filename);
    tokio::fs::write(&path, text)
        .await
        .map_err(|e| JeeviError::Channel {
            message: format!("failed to write attachment file: {e}"),
            source: Some(Box::new(e)),
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reply_is_inline() {
        assert_eq!(delivery_for("short", 1), Delivery::Inline);
    }

    #[test]
    fn limit_boundary_is_inclusive() {
        let at_limit = "a".repeat(INLINE_REPLY_LIMIT);
        assert_eq!(delivery_for(&at_limit, 1), Delivery::Inline);

        let over_limit = "a".repeat(INLINE_REPLY_LIMIT + 1);
        assert_eq!(
            delivery_for(&over_limit, 7),
            Delivery::Attachment {
                filename: "response_7.txt".into()
            }
        );
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // Multi-byte characters at the limit still fit inline.
        let at_limit = "π".repeat(INLINE_REPLY_LIMIT);
        assert_eq!(delivery_for(&at_limit, 1), Delivery::Inline);
    }

    #[tokio::test]
    async fn attachment_file_round_trips() {
        let path = write_attachment("the long reply", "response_99.txt")
            .await
            .unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "the long reply");
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
