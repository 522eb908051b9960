// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the [`KvStore`] trait.
//!
//! Backs `--ephemeral` runs and tests that do not care about durability.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use codehub_core::{CodehubError, KvStore};

/// A key-value store that keeps everything in a process-local map.
#[derive(Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, CodehubError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CodehubError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CodehubError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
