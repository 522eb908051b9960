// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`KvStore`] trait.
//!
//! One row per storage key. Values are whole JSON documents; the store
//! never inspects them.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use codehub_config::model::StorageConfig;
use codehub_core::{CodehubError, KvStore};

use crate::database::{map_tr_err, Database};

/// SQLite-backed key-value store.
pub struct SqliteKv {
    db: Database,
}

impl SqliteKv {
    /// Open the store described by `config`, creating the database file and
    /// the `kv` table on first use.
    pub async fn open(config: &StorageConfig) -> Result<Self, CodehubError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite kv store ready");
        Ok(Self { db })
    }

    /// Flush pending writes and checkpoint the WAL.
    pub async fn close(&self) -> Result<(), CodehubError> {
        self.db.close().await
    }
}

#[async_trait]
impl KvStore for SqliteKv {
    async fn get(&self, key: &str) -> Result<Option<String>, CodehubError> {
        let key = key.to_string();
        self.db
            .connection()
            .call(move |conn| {
                let value = conn
                    .query_row(
                        "SELECT value FROM kv WHERE key = ?1",
                        params![key],
                        |row| row.get::<_, String>(0),
                    )
                    .optional()?;
                Ok(value)
            })
            .await
            .map_err(map_tr_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CodehubError> {
        let key = key.to_string();
        let value = value.to_string();
        self.db
            .connection()
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    params![key, value],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    async fn remove(&self, key: &str) -> Result<(), CodehubError> {
        let key = key.to_string();
        self.db
            .connection()
            .call(move |conn| {
                conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn open_temp() -> (SqliteKv, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("kv.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };
        let kv = SqliteKv::open(&config).await.unwrap();
        (kv, dir)
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let (kv, _dir) = open_temp().await;
        assert_eq!(kv.get("projects").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let (kv, _dir) = open_temp().await;
        kv.set("projects", "[]").await.unwrap();
        assert_eq!(kv.get("projects").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let (kv, _dir) = open_temp().await;
        kv.set("auth", "{\"id\":\"a\"}").await.unwrap();
        kv.set("auth", "{\"id\":\"b\"}").await.unwrap();
        assert_eq!(
            kv.get("auth").await.unwrap().as_deref(),
            Some("{\"id\":\"b\"}")
        );
    }

    #[tokio::test]
    async fn remove_deletes_key() {
        let (kv, _dir) = open_temp().await;
        kv.set("auth", "{}").await.unwrap();
        kv.remove("auth").await.unwrap();
        assert_eq!(kv.get("auth").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_missing_key_is_not_an_error() {
        let (kv, _dir) = open_temp().await;
        kv.remove("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("kv.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };

        {
            let kv = SqliteKv::open(&config).await.unwrap();
            kv.set("messages", "[{\"id\":\"m1\"}]").await.unwrap();
            kv.close().await.unwrap();
        }

        let kv = SqliteKv::open(&config).await.unwrap();
        assert_eq!(
            kv.get("messages").await.unwrap().as_deref(),
            Some("[{\"id\":\"m1\"}]")
        );
    }
}
