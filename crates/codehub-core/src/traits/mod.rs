// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions implemented by pluggable backends.

pub mod kv;

pub use kv::{KvStore, KEY_AUTH, KEY_MESSAGES, KEY_PROJECTS};
