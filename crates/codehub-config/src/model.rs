// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the codehub engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level codehub configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CodehubConfig {
    /// Hub identity and logging settings.
    #[serde(default)]
    pub hub: HubConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Community chat responder settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Hub identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HubConfig {
    /// Display name of the hub.
    #[serde(default = "default_hub_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            name: default_hub_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_hub_name() -> String {
    "Source Code Hub".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file backing the key-value store.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("codehub").join("codehub.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("codehub.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Community chat responder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Enable the simulated admin auto-reply. When false, posting a chat
    /// message appends only the user's message.
    #[serde(default = "default_auto_reply")]
    pub auto_reply: bool,

    /// Delay in seconds before the simulated reply is appended.
    #[serde(default = "default_reply_delay_secs")]
    pub reply_delay_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            auto_reply: default_auto_reply(),
            reply_delay_secs: default_reply_delay_secs(),
        }
    }
}

fn default_auto_reply() -> bool {
    true
}

fn default_reply_delay_secs() -> u64 {
    2
}
