// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in data: the canonical admin list, the starter catalog, and the
//! chat welcome message.
//!
//! The admin list is the complete set of accounts that can ever log in.
//! It is never rewritten at runtime; profile edits touch only the persisted
//! session record.

use codehub_core::{Admin, AdminRole, ChatMessage, Project, ProjectType};

const HOUR_MS: i64 = 1000 * 60 * 60;

pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// The canonical, fixed admin list. Exactly two records.
pub fn builtin_admins() -> Vec<Admin> {
    vec![
        Admin {
            id: "silverhold-1".to_string(),
            username: "Silverhold".to_string(),
            name: "SilverHold Official".to_string(),
            role: AdminRole::Admin,
            quote: "Jangan lupa sholat walaupun kamu seorang pendosa, Allah lebih suka orang pendosa yang sering bertaubat daripada orang yang merasa suci".to_string(),
            hashtags: vec!["#bismillahcalonustad".to_string()],
            photo_url: "https://picsum.photos/id/64/400/400".to_string(),
            password: Some("Rian".to_string()),
        },
        Admin {
            id: "brayn-1".to_string(),
            username: "BraynOfficial".to_string(),
            name: "Brayn Official".to_string(),
            role: AdminRole::Owner,
            quote: "Tidak Semua Orang Suka Kita Berkembang Pesat!".to_string(),
            hashtags: vec![
                "#backenddev".to_string(),
                "#frontenddev".to_string(),
                "#BraynOfficial".to_string(),
            ],
            photo_url: "https://picsum.photos/id/91/400/400".to_string(),
            password: Some("Plerr321".to_string()),
        },
    ]
}

/// Starter catalog used when no persisted project collection exists.
pub fn initial_projects() -> Vec<Project> {
    let now = now_ms();
    vec![
        Project {
            id: "p1".to_string(),
            name: "Futuristic React Dashboard".to_string(),
            language: "React".to_string(),
            kind: ProjectType::Code,
            content: "import React from 'react';\nconst Dashboard = () => {\n  return <div className=\"p-10 bg-black text-red-500\">Welcome to CyberHub</div>;\n};\nexport default Dashboard;".to_string(),
            notes: Some("A high-performance dashboard for monitoring real-time data.".to_string()),
            preview_url: "https://picsum.photos/id/10/800/400".to_string(),
            likes: 124,
            downloads: 45,
            author_id: "brayn-1".to_string(),
            created_at: now - 24 * HOUR_MS,
        },
        Project {
            id: "p2".to_string(),
            name: "Node.js Auth Middleware".to_string(),
            language: "Node.js".to_string(),
            kind: ProjectType::Code,
            content: "const jwt = require('jsonwebtoken');\nmodule.exports = (req, res, next) => {\n  const token = req.header('x-auth-token');\n  if (!token) return res.status(401).send('Access Denied');\n  try {\n    const verified = jwt.verify(token, 'secret');\n    req.user = verified;\n    next();\n  } catch (err) { res.status(400).send('Invalid Token'); }\n};".to_string(),
            notes: Some("Standard JWT middleware for protected routes.".to_string()),
            preview_url: "https://picsum.photos/id/60/800/400".to_string(),
            likes: 89,
            downloads: 12,
            author_id: "silverhold-1".to_string(),
            created_at: now - 12 * HOUR_MS,
        },
    ]
}

/// The single message seeded when no persisted chat history exists.
pub fn welcome_message() -> ChatMessage {
    ChatMessage {
        id: "m1".to_string(),
        sender: "System".to_string(),
        text: "Welcome to Source Code Hub Chat!".to_string(),
        is_admin: true,
        timestamp: now_ms(),
    }
}

/// Resolve a project's author among the built-in admins, falling back to the
/// first admin when the `author_id` references nobody.
pub fn author_or_default(author_id: &str) -> Admin {
    let mut admins = builtin_admins();
    admins
        .iter()
        .position(|a| a.id == author_id)
        .map(|i| admins.swap_remove(i))
        .unwrap_or_else(|| admins.remove(0))
}
