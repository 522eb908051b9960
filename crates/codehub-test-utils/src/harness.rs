// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the full stack — a temp SQLite key-value store,
//! a loaded [`HubStore`], and a fast chat responder — and provides drivers
//! for the operations the views invoke.

use std::sync::Arc;
use std::time::Duration;

use codehub_config::model::StorageConfig;
use codehub_core::{ChatMessage, CodehubError, KvStore};
use codehub_hub::store::SharedStore;
use codehub_hub::{authenticate, seed, ChatResponder, HubStore};
use codehub_storage::SqliteKv;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    reply_delay: Duration,
    kv: Option<Arc<dyn KvStore>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            reply_delay: Duration::from_millis(10),
            kv: None,
        }
    }

    /// Override the simulated reply delay (defaults to 10 ms in tests).
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Use a specific key-value store instead of a temp SQLite database.
    pub fn with_kv(mut self, kv: Arc<dyn KvStore>) -> Self {
        self.kv = Some(kv);
        self
    }

    /// Build the test harness, creating the storage backend and loading
    /// the store.
    pub async fn build(self) -> Result<TestHarness, CodehubError> {
        let temp_dir = tempfile::TempDir::new().map_err(|e| CodehubError::Storage {
            source: e.into(),
        })?;

        let kv: Arc<dyn KvStore> = match self.kv {
            Some(kv) => kv,
            None => {
                let config = StorageConfig {
                    database_path: temp_dir
                        .path()
                        .join("test.db")
                        .to_string_lossy()
                        .into_owned(),
                    wal_mode: true,
                };
                Arc::new(SqliteKv::open(&config).await?)
            }
        };

        let store = HubStore::load(kv.clone()).await.into_shared();
        let responder = ChatResponder::new(store.clone(), self.reply_delay);

        Ok(TestHarness {
            store,
            kv,
            responder,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete test environment with temp storage and a fast responder.
pub struct TestHarness {
    /// The shared store, loaded from the temp backend.
    pub store: SharedStore,
    /// The raw key-value store, for inspecting persisted state.
    pub kv: Arc<dyn KvStore>,
    /// Chat responder wired to `store`.
    pub responder: ChatResponder,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Reload a fresh store from the same backend, as a process restart
    /// would.
    pub async fn reload(&self) -> HubStore {
        HubStore::load(self.kv.clone()).await
    }

    /// Authenticate against the built-in admin list and open a session on
    /// success. Returns whether the login succeeded.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let admins = seed::builtin_admins();
        match authenticate(&admins, username, password) {
            Some(admin) => {
                let mut store = self.store.lock().await;
                store.set_session(Some(admin.clone())).await;
                true
            }
            None => false,
        }
    }

    /// Post a chat message and wait for the simulated reply to land.
    pub async fn send_chat(&self, text: &str) -> ChatMessage {
        let (message, handle) = self.responder.post(text).await;
        handle.await.expect("reply task panicked");
        message
    }
}
