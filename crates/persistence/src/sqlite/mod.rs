// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite`-backed document store.

mod nodes;

use diesel::{Connection, SqliteConnection};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::backend;
use crate::error::PersistenceError;
use crate::store::Store;
use crate::tree;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A document store persisted in a single `SQLite` table.
///
/// Each write runs in its own transaction; no transaction spans calls.
pub struct SqliteStore {
    conn: Mutex<SqliteConnection>,
    next_key: AtomicU64,
}

impl SqliteStore {
    /// Creates a store over a fresh, isolated in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_roster_{db_id}?mode=memory&cache=shared");
        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self::from_connection(conn))
    }

    /// Opens (or creates) a file-based database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: SqliteConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
            next_key: AtomicU64::new(0),
        }
    }

    /// Builds a child key that sorts after every key this store issued
    /// earlier, and after keys from earlier process runs.
    fn next_child_key(&self) -> String {
        let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let seq: u64 = self.next_key.fetch_add(1, Ordering::SeqCst);
        format!("{millis:013}{seq:06}")
    }
}

impl Store for SqliteStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, PersistenceError> {
        let mut conn = self.conn.lock().await;
        nodes::get(&mut conn, path)
    }

    async fn query(
        &self,
        path: &str,
        field: &str,
        equals: &Value,
    ) -> Result<Vec<(String, Value)>, PersistenceError> {
        let node: Option<Value> = self.get(path).await?;
        Ok(tree::filter_children(node, field, equals))
    }

    async fn set(&self, path: &str, value: Value) -> Result<(), PersistenceError> {
        let mut conn = self.conn.lock().await;
        conn.transaction::<_, PersistenceError, _>(|conn| nodes::set(conn, path, value))
    }

    async fn update(&self, path: &str, fields: Map<String, Value>) -> Result<(), PersistenceError> {
        let mut conn = self.conn.lock().await;
        conn.transaction::<_, PersistenceError, _>(|conn| nodes::update(conn, path, fields))
    }

    async fn append(&self, path: &str) -> Result<String, PersistenceError> {
        let segs: Vec<&str> = tree::segments(path)?;
        Ok(format!("{}/{}", segs.join("/"), self.next_child_key()))
    }

    async fn remove(&self, path: &str) -> Result<(), PersistenceError> {
        let mut conn = self.conn.lock().await;
        conn.transaction::<_, PersistenceError, _>(|conn| nodes::remove(conn, path))
    }
}
