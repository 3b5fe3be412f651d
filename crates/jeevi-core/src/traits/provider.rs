// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for remote text-generation backends.

use async_trait::async_trait;

use crate::error::JeeviError;
use crate::traits::adapter::PluginAdapter;
use crate::types::ProviderCall;

/// Adapter for remote text-generation backends.
///
/// Implementations own their HTTP session; the shared client must
/// support concurrent use by multiple in-flight conversations.
#[async_trait]
pub trait TextProvider: PluginAdapter {
    /// Sends a generation call and returns the response text.
    ///
    /// Backends that do not support the `stream` or `web_access` flags
    /// ignore them.
    async fn generate(&self, call: ProviderCall) -> Result<String, JeeviError>;
}
