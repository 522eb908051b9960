// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the codehub engine.

use thiserror::Error;

/// The primary error type used across the codehub workspace.
#[derive(Debug, Error)]
pub enum CodehubError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure, connection loss).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Persisted data under a storage key could not be decoded.
    #[error("corrupt data under key `{key}`: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The supplied current password does not match the session admin's password.
    #[error("current password does not match")]
    PasswordMismatch,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
