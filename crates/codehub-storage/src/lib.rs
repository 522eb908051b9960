// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence layer for the codehub engine.
//!
//! Implements the [`codehub_core::KvStore`] trait over a single-table SQLite
//! database (the durable backend) and an in-memory map (tests and ephemeral
//! runs). Collections are stored as whole JSON documents under the keys
//! defined in codehub-core.

pub mod database;
pub mod memory;
pub mod sqlite;

pub use database::Database;
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;
