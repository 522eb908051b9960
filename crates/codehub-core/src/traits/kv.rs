// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value store trait for persistence backends.
//!
//! The store is an opaque string-keyed byte store: the engine reads and
//! writes whole JSON documents under a small set of well-known keys and
//! never assumes anything about the backing medium.

use async_trait::async_trait;

use crate::error::CodehubError;

/// Storage key for the serialized project collection.
pub const KEY_PROJECTS: &str = "projects";
/// Storage key for the serialized chat history.
pub const KEY_MESSAGES: &str = "messages";
/// Storage key for the current admin session. Absent when logged out.
pub const KEY_AUTH: &str = "auth";

/// Adapter for string-keyed persistence backends.
///
/// Each collection is persisted independently under its own key; there is
/// no transaction boundary spanning multiple keys.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CodehubError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), CodehubError>;

    /// Removes `key` if present. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), CodehubError>;
}
