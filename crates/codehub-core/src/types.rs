// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the codehub workspace.
//!
//! Serialized field names are camelCase and the project kind discriminator
//! is spelled `type`, matching the persisted JSON layout this engine
//! inherits. Timestamps are Unix epoch milliseconds.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether a project entry carries source code or a file reference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ProjectType {
    Code,
    File,
}

/// Privilege level of a built-in admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum AdminRole {
    Admin,
    Owner,
}

/// A shared code/file entry with engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Random 9-character base36 id, generated client-side. Not guaranteed
    /// globally unique.
    pub id: String,
    pub name: String,
    pub language: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    /// The source code itself, or a description/URL for file entries.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub preview_url: String,
    pub likes: u64,
    pub downloads: u64,
    /// May reference a nonexistent admin; no foreign-key enforcement.
    pub author_id: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

/// One of the fixed set of privileged accounts able to manage projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
    /// Display name shown in the catalog and chat.
    pub name: String,
    pub role: AdminRole,
    pub quote: String,
    pub hashtags: Vec<String>,
    pub photo_url: String,
    /// Plaintext credential, present only on records used for login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A single entry in the append-only community chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub is_admin: bool,
    /// Send time in epoch milliseconds. Messages are ordered by insertion,
    /// never re-sorted by this field.
    pub timestamp: i64,
}
