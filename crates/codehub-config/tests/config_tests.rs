// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the codehub configuration system.

use codehub_config::model::CodehubConfig;
use codehub_config::{load_and_validate_str, load_config_from_str, ConfigError};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_codehub_config() {
    let toml = r#"
[hub]
name = "test-hub"
log_level = "debug"

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[chat]
auto_reply = false
reply_delay_secs = 5
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.hub.name, "test-hub");
    assert_eq!(config.hub.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert!(!config.chat.auto_reply);
    assert_eq!(config.chat.reply_delay_secs, 5);
}

/// Unknown field in [hub] produces an error mentioning the bad key.
#[test]
fn unknown_field_in_hub_produces_error() {
    let toml = r#"
[hub]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.hub.name, "Source Code Hub");
    assert_eq!(config.hub.log_level, "info");
    assert!(config.storage.wal_mode);
    assert!(config.chat.auto_reply);
    assert_eq!(config.chat.reply_delay_secs, 2);
}

/// Dotted-key overrides merge over TOML values (how env vars land).
#[test]
fn override_merges_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[hub]
name = "from-toml"
"#;

    let config: CodehubConfig = Figment::new()
        .merge(Serialized::defaults(CodehubConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("hub.name", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.hub.name, "from-env");
}

/// Underscore-containing keys map as one segment, not nested tables.
#[test]
fn reply_delay_secs_maps_as_single_key() {
    use figment::{providers::Serialized, Figment};

    let config: CodehubConfig = Figment::new()
        .merge(Serialized::defaults(CodehubConfig::default()))
        .merge(("chat.reply_delay_secs", 7u64))
        .extract()
        .expect("should set reply_delay_secs via dot notation");

    assert_eq!(config.chat.reply_delay_secs, 7);
}

/// load_and_validate_str surfaces typo diagnostics with suggestions.
#[test]
fn typo_produces_unknown_key_diagnostic() {
    let toml = r#"
[storage]
wal_mod = true
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should be rejected");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "wal_mod" && suggestion.as_deref() == Some("wal_mode")
    )));
}

/// Semantic validation runs after successful deserialization.
#[test]
fn validation_rejects_bad_log_level() {
    let toml = r#"
[hub]
log_level = "shouty"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad level should be rejected");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
    ));
}
