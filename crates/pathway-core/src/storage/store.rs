//! Key-value progress store.
//!
//! All durable learner state (daily scores, drill history, forest counter,
//! method assignment) lives in a single key-value namespace. The store is
//! append-or-overwrite only: nothing in the application ever deletes a key.
//!
//! Read policy: absent or malformed stored data yields an empty/default
//! value. A corrupt record must never take the app down, so parse failures
//! are swallowed at this layer and callers always get something usable.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StoreError;

use super::data_dir;

/// Abstraction over the key-value progress store.
///
/// Implementors provide the raw string get/set; the typed accessors layered
/// on top encode the read-default policy in one place. Tests inject
/// [`MemoryStore`]; the CLI uses the SQLite-backed [`Database`].
pub trait ProgressStore {
    /// Fetch the raw string stored under `key`, if any.
    ///
    /// Read faults (including query errors) surface as `None`.
    fn raw_get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn raw_set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a JSON record map stored under `key`.
    ///
    /// Absent or malformed data yields an empty map.
    fn get_all<T: DeserializeOwned>(&self, key: &str) -> HashMap<String, T> {
        self.raw_get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Insert or overwrite one entry of the record map stored under `key`.
    fn set_record<T: Serialize>(
        &self,
        key: &str,
        subkey: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let mut map: serde_json::Map<String, serde_json::Value> = self
            .raw_get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        map.insert(subkey.to_string(), serde_json::to_value(value)?);
        self.raw_set(key, &serde_json::Value::Object(map).to_string())
    }

    /// Read a non-negative counter. Absent, malformed, or negative stored
    /// values all read as 0.
    fn get_counter(&self, key: &str) -> u64 {
        self.raw_get(key)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|n| n.max(0) as u64)
            .unwrap_or(0)
    }

    /// Store a counter value.
    fn set_counter(&self, key: &str, value: u64) -> Result<(), StoreError> {
        self.raw_set(key, &value.to_string())
    }

    /// Read a scalar string, if present.
    fn get_scalar(&self, key: &str) -> Option<String> {
        self.raw_get(key)
    }

    /// Store a scalar string.
    fn set_scalar(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.raw_set(key, value)
    }
}

/// SQLite-backed progress store.
///
/// A single `kv` table holds every record under its fixed string key.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `~/.config/pathway/pathway.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .join("pathway.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv table.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv table.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl ProgressStore for Database {
    fn raw_get(&self, key: &str) -> Option<String> {
        self.kv_get(key).ok().flatten()
    }

    fn raw_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.kv_set(key, value)
    }
}

/// In-memory progress store used as a test double.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn raw_get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn raw_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::QueryFailed(format!("lock failed: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        score: u32,
    }

    #[test]
    fn kv_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn record_map_roundtrip() {
        let db = Database::open_memory().unwrap();
        db.set_record("scores", "2026-01-05", &Entry { score: 2 })
            .unwrap();
        db.set_record("scores", "2026-01-06", &Entry { score: 1 })
            .unwrap();

        let all: HashMap<String, Entry> = db.get_all("scores");
        assert_eq!(all.len(), 2);
        assert_eq!(all["2026-01-05"], Entry { score: 2 });
    }

    #[test]
    fn record_overwrites_same_subkey() {
        let store = MemoryStore::new();
        store
            .set_record("scores", "2026-01-05", &Entry { score: 0 })
            .unwrap();
        store
            .set_record("scores", "2026-01-05", &Entry { score: 2 })
            .unwrap();

        let all: HashMap<String, Entry> = store.get_all("scores");
        assert_eq!(all.len(), 1);
        assert_eq!(all["2026-01-05"], Entry { score: 2 });
    }

    #[test]
    fn corrupt_map_reads_empty() {
        let store = MemoryStore::new();
        store.raw_set("scores", "{not json").unwrap();
        let all: HashMap<String, Entry> = store.get_all("scores");
        assert!(all.is_empty());
    }

    #[test]
    fn corrupt_map_is_replaced_on_next_write() {
        let store = MemoryStore::new();
        store.raw_set("scores", "{not json").unwrap();
        store
            .set_record("scores", "2026-01-05", &Entry { score: 1 })
            .unwrap();
        let all: HashMap<String, Entry> = store.get_all("scores");
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn counter_defaults_and_floors() {
        let store = MemoryStore::new();
        assert_eq!(store.get_counter("trees"), 0);

        store.set_counter("trees", 3).unwrap();
        assert_eq!(store.get_counter("trees"), 3);

        store.raw_set("trees", "-7").unwrap();
        assert_eq!(store.get_counter("trees"), 0);

        store.raw_set("trees", "garbage").unwrap();
        assert_eq!(store.get_counter("trees"), 0);
    }

    #[test]
    fn scalar_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get_scalar("method").is_none());
        store.set_scalar("method", "A").unwrap();
        assert_eq!(store.get_scalar("method").unwrap(), "A");
    }
}
