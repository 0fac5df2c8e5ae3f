use std::{
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;

/// Durable key-value store backed by a single SQLite table.
///
/// Survives restarts; one connection guarded by a mutex, which matches the
/// single logical thread of control the services assume.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("failed to open store at {}", db_path.display()))?;

        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            error!("Failed to enable WAL mode: {err}");
        }

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                 key TEXT PRIMARY KEY,
                 value BLOB NOT NULL
             )",
            [],
        )
        .context("failed to create kv table")?;

        info!("Key-value store initialized at {}", db_path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let conn = self.conn.lock().unwrap();
        let result = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(err) => {
                error!("Failed to read key {key}: {err}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &[u8]) {
        let conn = self.conn.lock().unwrap();
        let result = conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        );

        if let Err(err) = result {
            error!("Failed to write key {key}: {err}");
        }
    }
}
