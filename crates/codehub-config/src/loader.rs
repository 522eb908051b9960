// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./codehub.toml` > `~/.config/codehub/codehub.toml`
//! > `/etc/codehub/codehub.toml` with environment variable overrides via the
//! `CODEHUB_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CodehubConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/codehub/codehub.toml` (system-wide)
/// 3. `~/.config/codehub/codehub.toml` (user XDG config)
/// 4. `./codehub.toml` (local directory)
/// 5. `CODEHUB_*` environment variables
pub fn load_config() -> Result<CodehubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CodehubConfig::default()))
        .merge(Toml::file("/etc/codehub/codehub.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("codehub/codehub.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("codehub.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CodehubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CodehubConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CodehubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CodehubConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CODEHUB_CHAT_REPLY_DELAY_SECS` must map
/// to `chat.reply_delay_secs`, not `chat.reply.delay.secs`.
fn env_provider() -> Env {
    Env::prefixed("CODEHUB_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: CODEHUB_STORAGE_DATABASE_PATH -> "storage_database_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("hub_", "hub.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("chat_", "chat.", 1);
        mapped.into()
    })
}
