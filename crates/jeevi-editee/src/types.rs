// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editee gateway request/response types.

use serde::{Deserialize, Serialize};

/// A request to the Editee text gateway.
///
/// The gateway multiplexes several upstream models behind one
/// endpoint; `selected_model` picks the backend, `context` carries
/// system prompt and rendered history as one free-text block.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayRequest {
    /// System prompt and rendered history, empty when absent.
    pub context: String,
    /// Backend model name (e.g. "gpt4", "claude", "gemini").
    pub selected_model: String,
    pub prompt: String,
    /// Ask the backend to consult live web results.
    pub web_access: bool,
}

/// The gateway's non-streaming response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayResponse {
    pub text: String,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayErrorResponse {
    pub error: String,
}
