// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::error::PersistenceError;
use crate::store::Store;
use crate::tree;

/// An in-process document store.
///
/// Child keys from `append` are sequential per instance, so tests see a
/// deterministic insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    root: Mutex<Value>,
    next_key: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Mutex::new(Value::Object(Map::new())),
            next_key: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the entire tree.
    pub async fn snapshot(&self) -> Value {
        self.root.lock().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, PersistenceError> {
        let segs: Vec<&str> = tree::segments(path)?;
        let root = self.root.lock().await;
        Ok(tree::lookup(&root, &segs).cloned())
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
        let segs: Vec<&str> = tree::segments(path)?;
        let mut root = self.root.lock().await;
        tree::insert(&mut root, &segs, value);
        Ok(())
    }

    async fn update(&self, path: &str, fields: Map<String, Value>) -> Result<(), PersistenceError> {
        let segs: Vec<&str> = tree::segments(path)?;
        let mut root = self.root.lock().await;
        // Merge into a copy so a bad field name leaves the tree untouched.
        let mut node: Value = tree::lookup(&root, &segs)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        tree::merge(&mut node, fields)?;
        tree::insert(&mut root, &segs, node);
        Ok(())
    }

    async fn append(&self, path: &str) -> Result<String, PersistenceError> {
        let segs: Vec<&str> = tree::segments(path)?;
        let key: u64 = self.next_key.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}/{key:012}", segs.join("/")))
    }

    async fn remove(&self, path: &str) -> Result<(), PersistenceError> {
        let segs: Vec<&str> = tree::segments(path)?;
        let mut root = self.root.lock().await;
        tree::remove(&mut root, &segs);
        Ok(())
    }
}
