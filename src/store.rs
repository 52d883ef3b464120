//! Durable key→string storage.
//!
//! The browser original kept every slot in `localStorage`; here the same
//! contract is a trait over a synchronous key→string map, with a SQLite
//! implementation for the runtime and an in-memory one for tests.

use std::collections::HashMap;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

// Exact slot keys preserved for interoperability with existing stored data.
pub const ADMIN_AUTH_KEY: &str = "farmAdminAuthenticated";
pub const DASH_VIS_KEY: &str = "farmDashboardVisibility";
pub const METRICS_KEY: &str = "farmMetrics";
pub const INVENTORY_KEY: &str = "farmInventoryItems";
pub const ACTIVITIES_KEY: &str = "farmAdminActivities";
pub const CHARTS_KEY: &str = "farmChartSettings";
pub const CONTENT_KEY: &str = "farmContentSettings";

/// Synchronous key→string map with single-key atomicity. No multi-key
/// transactions are offered and none are needed.
pub trait SlotStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// SQLite-backed store: one `slots(key, value)` table standing in for the
/// browser's origin-scoped storage.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    fn init(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "BEGIN;
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            COMMIT;",
        )?;
        Ok(())
    }
}

impl SlotStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.conn
            .query_row("SELECT value FROM slots WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .ok()
            .flatten()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        let res = self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, crate::config::now_ts() as i64],
        );
        if let Err(err) = res {
            crate::logging::json_log(
                crate::logging::Domain::Store,
                "write_failed",
                crate::logging::obj(&[
                    ("key", crate::logging::v_str(key)),
                    ("error", crate::logging::v_str(&err.to_string())),
                ]),
            );
        }
    }

    fn remove(&mut self, key: &str) {
        let _ = self
            .conn
            .execute("DELETE FROM slots WHERE key = ?1", params![key]);
    }
}
