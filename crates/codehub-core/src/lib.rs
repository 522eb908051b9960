// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the codehub engine.
//!
//! This crate provides the error type, the domain types (projects, admins,
//! chat messages), and the [`KvStore`] trait that persistence backends
//! implement. Everything else in the workspace builds on these.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CodehubError;
pub use traits::{KvStore, KEY_AUTH, KEY_MESSAGES, KEY_PROJECTS};
pub use types::{Admin, AdminRole, ChatMessage, Project, ProjectType};
