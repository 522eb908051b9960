// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use std::path::Path;

use codehub_core::CodehubError;
use tokio_rusqlite::Connection;
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
) STRICT;";

/// Map a tokio-rusqlite error into the workspace error type.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> CodehubError {
    CodehubError::Storage {
        source: Box::new(e),
    }
}

/// A handle to the SQLite database backing the key-value store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` and prepare the `kv` table.
    ///
    /// Parent directories are created if missing. With `wal_mode` enabled
    /// the journal is switched to WAL before any statement runs.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, CodehubError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CodehubError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| CodehubError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| {
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")?;
            }
            conn.pragma_update(None, "busy_timeout", 5000)?;
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "kv database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying async connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Flush pending WAL frames back into the main database file.
    pub async fn close(&self) -> Result<(), CodehubError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}
