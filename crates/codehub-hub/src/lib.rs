// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The codehub engine: state store, access gate, and chat responder.
//!
//! [`HubStore`] owns the three persisted collections (projects, chat
//! history, admin session) and mirrors every mutation to the key-value
//! store. [`authenticate`] is the pure credential gate over the fixed
//! admin list in [`seed`]. [`ChatResponder`] appends the simulated admin
//! reply after each user post.

pub mod auth;
pub mod responder;
pub mod seed;
pub mod store;

pub use auth::{apply_profile_update, authenticate, parse_hashtags, ProfileUpdate};
pub use responder::{ChatResponder, REPLY_POOL};
pub use store::{new_project_id, HubStore, SharedStore};
