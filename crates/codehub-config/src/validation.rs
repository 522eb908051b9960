// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::CodehubConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &CodehubConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.hub.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "hub.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.hub.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "hub.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.hub.log_level
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // An auto-reply hours out would read as no reply at all.
    if config.chat.reply_delay_secs > 300 {
        errors.push(ConfigError::Validation {
            message: format!(
                "chat.reply_delay_secs must be at most 300, got {}",
                config.chat.reply_delay_secs
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
