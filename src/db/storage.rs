//! Persistent key/value store for client state (session fields and the
//! dark-mode preference), backed by the `local_storage` table.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct LocalStorage {
    pool: DbPool,
}

impl LocalStorage {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Drop every stored key.
    pub fn clear(&self) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM local_storage", [])?;
        Ok(())
    }

    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Append an audit line; failures are reported but never abort the
    /// calling command.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            tracing::warn!(error = %e, operation, "failed to write internal log");
        }
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_clear_drops_everything() {
        let s = LocalStorage::in_memory().unwrap();
        s.set("token", "a").unwrap();
        s.set("token", "b").unwrap();
        s.set("darkMode", "true").unwrap();
        assert_eq!(s.get("token").unwrap().as_deref(), Some("b"));
        assert_eq!(s.keys().unwrap(), vec!["darkMode", "token"]);

        s.remove("token").unwrap();
        assert_eq!(s.get("token").unwrap(), None);

        s.clear().unwrap();
        assert!(s.keys().unwrap().is_empty());
    }
}
