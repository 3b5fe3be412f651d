// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed conversation transcript store.
//!
//! One UTF-8 text file per conversation, strictly alternating lines:
//! `User: <text>` then `<AssistantName>: <text>`, one turn per two
//! lines. Embedded newlines are not escaped; a newline inside a turn
//! corrupts parsing for that and possibly subsequent entries. This is
//! a documented limitation of the format, not fixed here.
//!
//! Concurrent turns on the same conversation id race on the
//! read-modify-write of the transcript file; the last writer wins and
//! an earlier turn's append may be lost. Accepted limitation.

pub mod store;

pub use store::HistoryStore;
