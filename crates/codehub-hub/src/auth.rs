// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access control gate and the profile-update flow.
//!
//! Authentication is a pure lookup over the fixed admin list: username
//! compared case-insensitively, password by exact plaintext equality. The
//! gate does not touch the session; callers pair it with
//! [`HubStore::set_session`](crate::store::HubStore::set_session).

use codehub_core::{Admin, CodehubError};

/// Validate a `(username, password)` pair against `admins`.
///
/// Returns the first admin whose username matches case-insensitively and
/// whose stored password equals `password` exactly. An admin without a
/// stored password never authenticates.
pub fn authenticate<'a>(admins: &'a [Admin], username: &str, password: &str) -> Option<&'a Admin> {
    let username = username.to_lowercase();
    admins.iter().find(|a| {
        a.username.to_lowercase() == username && a.password.as_deref() == Some(password)
    })
}

/// Editable profile fields plus the optional password change.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub photo_url: String,
    pub quote: String,
    pub hashtags: Vec<String>,
    /// Must match the session admin's current password when `new_password`
    /// is set. Ignored otherwise.
    pub current_password: Option<String>,
    /// `None` or empty keeps the current password.
    pub new_password: Option<String>,
}

/// Apply a profile update to the session admin's record.
///
/// Changing the password requires the correct current password; on mismatch
/// the whole update is rejected and no field changes. Otherwise every
/// editable field is applied unconditionally and the password is replaced
/// only when a new one was supplied.
pub fn apply_profile_update(
    admin: &Admin,
    update: &ProfileUpdate,
) -> Result<Admin, CodehubError> {
    let new_password = update.new_password.as_deref().filter(|p| !p.is_empty());

    if new_password.is_some() && update.current_password.as_deref() != admin.password.as_deref() {
        return Err(CodehubError::PasswordMismatch);
    }

    let mut updated = admin.clone();
    updated.name = update.name.clone();
    updated.photo_url = update.photo_url.clone();
    updated.quote = update.quote.clone();
    updated.hashtags = update.hashtags.clone();
    if let Some(password) = new_password {
        updated.password = Some(password.to_string());
    }
    Ok(updated)
}

/// Split a comma-separated hashtag string into trimmed entries.
pub fn parse_hashtags(input: &str) -> Vec<String> {
    input.split(',').map(|h| h.trim().to_string()).collect()
}
