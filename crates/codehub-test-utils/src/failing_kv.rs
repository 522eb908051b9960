// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A key-value store whose writes fail on demand, for exercising the
//! store's log-and-continue degradation path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use codehub_core::{CodehubError, KvStore};

/// Wraps an in-memory map; reads always work, writes fail while the
/// `fail_writes` flag is set.
#[derive(Default)]
pub struct FailingKv {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl FailingKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle write failures.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn write_error() -> CodehubError {
        CodehubError::Storage {
            source: Box::new(std::io::Error::other("simulated write failure")),
        }
    }
}

#[async_trait]
impl KvStore for FailingKv {
    async fn get(&self, key: &str) -> Result<Option<String>, CodehubError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CodehubError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::write_error());
        }
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CodehubError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::write_error());
        }
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
