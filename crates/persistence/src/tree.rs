// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-path operations on a JSON document tree.
//!
//! Both store implementations share these so that path semantics are
//! identical: `/` separates segments, writing `null` removes, and objects
//! left empty by a removal are pruned.

use serde_json::{Map, Value};

use crate::error::PersistenceError;

/// Splits a key path into segments.
///
/// Leading and trailing `/` are ignored.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidPath` for an empty path or a path with
/// an empty segment.
pub fn segments(path: &str) -> Result<Vec<&str>, PersistenceError> {
    let trimmed: &str = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(PersistenceError::InvalidPath(path.to_string()));
    }
    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(PersistenceError::InvalidPath(path.to_string()));
    }
    Ok(parts)
}

/// Finds the node at `segs` below `root`.
#[must_use]
pub fn lookup<'a>(root: &'a Value, segs: &[&str]) -> Option<&'a Value> {
    segs.iter()
        .try_fold(root, |node, seg| node.as_object().and_then(|m| m.get(*seg)))
}

/// Writes `value` at `segs` below `root`, creating intermediate objects.
///
/// A `null` value removes the node instead.
pub fn insert(root: &mut Value, segs: &[&str], value: Value) {
    if value.is_null() {
        remove(root, segs);
        return;
    }
    let Some((first, rest)) = segs.split_first() else {
        *root = value;
        return;
    };
    if !root.is_object() {
        *root = Value::Object(Map::new());
    }
    if let Value::Object(map) = root {
        let child: &mut Value = map
            .entry((*first).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        insert(child, rest, value);
    }
}

/// Removes the node at `segs` below `root`, pruning emptied parents.
///
/// Returns true if `root` itself is now an empty object.
pub fn remove(root: &mut Value, segs: &[&str]) -> bool {
    let Some((first, rest)) = segs.split_first() else {
        *root = Value::Object(Map::new());
        return true;
    };
    let Value::Object(map) = root else {
        return false;
    };
    if rest.is_empty() {
        map.remove(*first);
    } else {
        let emptied: bool = map.get_mut(*first).is_some_and(|child| remove(child, rest));
        if emptied {
            map.remove(*first);
        }
    }
    map.is_empty()
}

/// Writes each field below `node`. Field names may themselves be paths.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidPath` if a field name is not a valid path.
pub fn merge(node: &mut Value, fields: Map<String, Value>) -> Result<(), PersistenceError> {
    for (key, value) in fields {
        let key_segs: Vec<&str> = segments(&key)?;
        insert(node, &key_segs, value);
    }
    Ok(())
}

/// Returns the children of `node` whose `field` equals `equals`.
#[must_use]
pub fn filter_children(node: Option<Value>, field: &str, equals: &Value) -> Vec<(String, Value)> {
    match node {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter(|(_, child)| child.get(field) == Some(equals))
            .collect(),
        _ => Vec::new(),
    }
}
