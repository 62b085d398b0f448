// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The narrow storage interface every operation runs against.
//!
//! Paths are `/`-separated keys such as `athletes/jane-runner`. The store
//! makes no relational or cross-path transactional promises; every call is
//! independent.

use serde_json::{Map, Value};
use std::future::Future;

use crate::error::PersistenceError;

/// A key-path addressable document store.
pub trait Store: Send + Sync {
    /// Reads the value at `path`, or `None` if nothing is stored there.
    fn get(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Option<Value>, PersistenceError>> + Send;

    /// Returns the children of `path` whose `field` equals `equals`, keyed
    /// by child key.
    fn query(
        &self,
        path: &str,
        field: &str,
        equals: &Value,
    ) -> impl Future<Output = Result<Vec<(String, Value)>, PersistenceError>> + Send;

    /// Replaces the value at `path`. Writing `null` removes it.
    fn set(
        &self,
        path: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Writes each field below `path` in one call, leaving other fields of
    /// the node untouched. Field names may be relative paths.
    fn update(
        &self,
        path: &str,
        fields: Map<String, Value>,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Generates a new unique child path below `path`. Nothing is written.
    fn append(&self, path: &str) -> impl Future<Output = Result<String, PersistenceError>> + Send;

    /// Removes the value at `path` and everything below it.
    fn remove(&self, path: &str) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}
