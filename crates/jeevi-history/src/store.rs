// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`HistoryStore`]: load/save of per-conversation transcripts.

use std::path::{Path, PathBuf};

use jeevi_core::{JeeviError, Transcript, Turn};
use tracing::warn;

/// Line prefix for the user side of a turn.
const USER_PREFIX: &str = "User: ";

/// Loads and saves ordered conversation transcripts, keyed by
/// conversation id (one file per Discord thread).
///
/// The assistant line prefix is the configured assistant name, so
/// transcripts written under one name are not readable under another.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
    assistant_name: String,
}

impl HistoryStore {
    /// Creates a store rooted at `dir`, creating the directory if absent.
    ///
    /// Directory creation happens once here, at process start.
    pub async fn new(
        dir: impl Into<PathBuf>,
        assistant_name: impl Into<String>,
    ) -> Result<Self, JeeviError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            assistant_name: assistant_name.into(),
        })
    }

    /// Path of the transcript file for a conversation id.
    pub fn transcript_path(&self, conversation_id: &str) -> PathBuf {
        self.dir.join(format!("thread_{conversation_id}.txt"))
    }

    /// Loads the transcript for `conversation_id`.
    ///
    /// A missing file is not an error: it yields an empty transcript.
    /// Lines are parsed in alternating user/assistant pairs; a pair
    /// missing its expected prefix, or an odd trailing line, is skipped
    /// with a warning. Other I/O errors propagate.
    pub async fn load(&self, conversation_id: &str) -> Result<Transcript, JeeviError> {
        let path = self.transcript_path(conversation_id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Transcript::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(self.parse_transcript(&content, &path))
    }

    /// Overwrites the persisted transcript for `conversation_id`.
    ///
    /// Each complete turn is serialized as two lines; turns with an
    /// empty field are omitted with a warning. I/O errors propagate so
    /// no turn is silently lost.
    pub async fn save(
        &self,
        conversation_id: &str,
        transcript: &Transcript,
    ) -> Result<(), JeeviError> {
        let path = self.transcript_path(conversation_id);
        let mut out = String::new();

        for turn in transcript.turns() {
            if !turn.is_complete() {
                warn!(
                    conversation_id,
                    "skipping incomplete turn: user or assistant text empty"
                );
                continue;
            }
            out.push_str(USER_PREFIX);
            out.push_str(&turn.user);
            out.push('\n');
            out.push_str(&self.assistant_name);
            out.push_str(": ");
            out.push_str(&turn.assistant);
            out.push('\n');
        }

        tokio::fs::write(&path, out).await?;
        Ok(())
    }

    fn parse_transcript(&self, content: &str, path: &Path) -> Transcript {
        let assistant_prefix = format!("{}: ", self.assistant_name);
        let lines: Vec<&str> = content.lines().collect();
        let mut transcript = Transcript::new();

        let mut i = 0;
        while i < lines.len() {
            if i + 1 >= lines.len() {
                warn!(
                    path = %path.display(),
                    line = i + 1,
                    "incomplete entry at end of transcript, skipping"
                );
                break;
            }

            let user_line = lines[i].trim_end();
            let assistant_line = lines[i + 1].trim_end();

            match (
                user_line.strip_prefix(USER_PREFIX),
                assistant_line.strip_prefix(assistant_prefix.as_str()),
            ) {
                (Some(user), Some(assistant)) => {
                    transcript.push(Turn::new(user, assistant));
                }
                _ => {
                    warn!(
                        path = %path.display(),
                        lines = format!("{}-{}", i + 1, i + 2),
                        "unexpected line format in transcript, skipping pair"
                    );
                }
            }
            i += 2;
        }

        transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSISTANT: &str = "Peru Leni Jeevi";

    async fn store(dir: &Path) -> HistoryStore {
        HistoryStore::new(dir, ASSISTANT).await.unwrap()
    }

    #[tokio::test]
    async fn load_nonexistent_returns_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let transcript = store.load("12345").await.unwrap();
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let mut transcript = Transcript::new();
        transcript.push(Turn::new("what is rust?", "A systems language."));
        transcript.push(Turn::new("and tokio?", "An async runtime."));

        store.save("42", &transcript).await.unwrap();
        let loaded = store.load("42").await.unwrap();

        assert_eq!(loaded, transcript);
    }

    #[tokio::test]
    async fn incomplete_turn_is_dropped_on_save() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let mut transcript = Transcript::new();
        transcript.push(Turn::new("kept question", "kept answer"));
        transcript.push(Turn::new("dropped question", ""));

        store.save("7", &transcript).await.unwrap();
        let loaded = store.load("7").await.unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.turns()[0].user, "kept question");
    }

    #[tokio::test]
    async fn malformed_pair_is_skipped_on_load() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let raw = format!(
            "User: good question\n{ASSISTANT}: good answer\n\
             not a user line\n{ASSISTANT}: orphan answer\n\
             User: second question\n{ASSISTANT}: second answer\n"
        );
        tokio::fs::write(store.transcript_path("9"), raw)
            .await
            .unwrap();

        let loaded = store.load("9").await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.turns()[0].user, "good question");
        assert_eq!(loaded.turns()[1].user, "second question");
    }

    #[tokio::test]
    async fn odd_trailing_line_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let raw = format!("User: q\n{ASSISTANT}: a\nUser: dangling\n");
        tokio::fs::write(store.transcript_path("11"), raw)
            .await
            .unwrap();

        let loaded = store.load("11").await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_previous_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let mut first = Transcript::new();
        first.push(Turn::new("old", "old answer"));
        store.save("3", &first).await.unwrap();

        let mut second = Transcript::new();
        second.push(Turn::new("new", "new answer"));
        store.save("3", &second).await.unwrap();

        let loaded = store.load("3").await.unwrap();
        assert_eq!(loaded, second);
    }

    #[tokio::test]
    async fn wrong_assistant_name_skips_pairs() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store(tmp.path()).await;

        let raw = "User: q\nSomeoneElse: a\n";
        tokio::fs::write(store.transcript_path("5"), raw)
            .await
            .unwrap();

        let loaded = store.load("5").await.unwrap();
        assert!(loaded.is_empty());
    }
}
