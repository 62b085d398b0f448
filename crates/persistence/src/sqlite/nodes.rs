// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row-level document operations on the `nodes` table.
//!
//! At most one row exists on any root-to-leaf path: a row owns every key
//! below it. Writes inside an owned subtree rewrite the owning row; writes
//! elsewhere replace the subtree with a single row.

use diesel::prelude::*;
use serde_json::{Map, Value};
use tracing::debug;

use crate::data_models::NodeRow;
use crate::diesel_schema::nodes;
use crate::error::PersistenceError;
use crate::tree;

/// The stored row that owns `segs`, as (owned segment count, document).
type Owner = (usize, Value);

/// Lower bound (exclusive) of descendant paths.
fn descendant_floor(path: &str) -> String {
    format!("{path}/")
}

/// Upper bound (exclusive) of descendant paths: `0` sorts right after `/`.
fn descendant_ceiling(path: &str) -> String {
    format!("{path}0")
}

fn find_exact(conn: &mut SqliteConnection, path: &str) -> Result<Option<Value>, PersistenceError> {
    let raw: Option<String> = nodes::table
        .filter(nodes::path.eq(path))
        .select(nodes::value)
        .first::<String>(conn)
        .optional()?;
    raw.map(|r| serde_json::from_str(&r).map_err(PersistenceError::from))
        .transpose()
}

fn find_owner(
    conn: &mut SqliteConnection,
    segs: &[&str],
) -> Result<Option<Owner>, PersistenceError> {
    for depth in 1..=segs.len() {
        let prefix: String = segs[..depth].join("/");
        if let Some(doc) = find_exact(conn, &prefix)? {
            return Ok(Some((depth, doc)));
        }
    }
    Ok(None)
}

fn load_descendants(
    conn: &mut SqliteConnection,
    path: &str,
) -> Result<Vec<NodeRow>, PersistenceError> {
    Ok(nodes::table
        .filter(nodes::path.gt(descendant_floor(path)))
        .filter(nodes::path.lt(descendant_ceiling(path)))
        .order(nodes::path.asc())
        .select(NodeRow::as_select())
        .load::<NodeRow>(conn)?)
}

fn write_row(conn: &mut SqliteConnection, path: &str, value: &Value) -> Result<(), PersistenceError> {
    if value.as_object().is_some_and(Map::is_empty) {
        return delete_subtree(conn, path);
    }
    let row: NodeRow = NodeRow {
        path: path.to_string(),
        value: serde_json::to_string(value)?,
    };
    diesel::replace_into(nodes::table).values(&row).execute(conn)?;
    Ok(())
}

fn delete_subtree(conn: &mut SqliteConnection, path: &str) -> Result<(), PersistenceError> {
    diesel::delete(nodes::table.filter(nodes::path.eq(path))).execute(conn)?;
    diesel::delete(
        nodes::table
            .filter(nodes::path.gt(descendant_floor(path)))
            .filter(nodes::path.lt(descendant_ceiling(path))),
    )
    .execute(conn)?;
    Ok(())
}

/// Reads the value at `path`, assembling it from descendant rows if needed.
///
/// # Errors
///
/// Returns an error if the path is invalid or a query fails.
pub fn get(conn: &mut SqliteConnection, path: &str) -> Result<Option<Value>, PersistenceError> {
    let segs: Vec<&str> = tree::segments(path)?;
    if let Some((depth, doc)) = find_owner(conn, &segs)? {
        return Ok(tree::lookup(&doc, &segs[depth..]).cloned());
    }

    let path: String = segs.join("/");
    let rows: Vec<NodeRow> = load_descendants(conn, &path)?;
    if rows.is_empty() {
        return Ok(None);
    }

    let mut assembled: Value = Value::Object(Map::new());
    for row in rows {
        let relative: &str = &row.path[path.len() + 1..];
        let value: Value = serde_json::from_str(&row.value)?;
        tree::insert(&mut assembled, &tree::segments(relative)?, value);
    }
    Ok(Some(assembled))
}

/// Replaces the value at `path`.
///
/// # Errors
///
/// Returns an error if the path is invalid or a write fails.
pub fn set(conn: &mut SqliteConnection, path: &str, value: Value) -> Result<(), PersistenceError> {
    let segs: Vec<&str> = tree::segments(path)?;
    let path: String = segs.join("/");

    if let Some((depth, mut doc)) = find_owner(conn, &segs)? {
        tree::insert(&mut doc, &segs[depth..], value);
        let owner: String = segs[..depth].join("/");
        debug!(path = %path, owner = %owner, "rewriting owning document");
        return write_row(conn, &owner, &doc);
    }

    delete_subtree(conn, &path)?;
    if value.is_null() {
        return Ok(());
    }
    write_row(conn, &path, &value)
}

/// Writes each field below `path`.
///
/// # Errors
///
/// Returns an error if the path or a field name is invalid, or a write fails.
pub fn update(
    conn: &mut SqliteConnection,
    path: &str,
    fields: Map<String, Value>,
) -> Result<(), PersistenceError> {
    let segs: Vec<&str> = tree::segments(path)?;

    if let Some((depth, mut doc)) = find_owner(conn, &segs)? {
        let mut node: Value = tree::lookup(&doc, &segs[depth..])
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        tree::merge(&mut node, fields)?;
        tree::insert(&mut doc, &segs[depth..], node);
        return write_row(conn, &segs[..depth].join("/"), &doc);
    }

    let path: String = segs.join("/");
    for (key, value) in fields {
        let key_segs: Vec<&str> = tree::segments(&key)?;
        set(conn, &format!("{path}/{}", key_segs.join("/")), value)?;
    }
    Ok(())
}

/// Removes the value at `path` and everything below it.
///
/// # Errors
///
/// Returns an error if the path is invalid or a write fails.
pub fn remove(conn: &mut SqliteConnection, path: &str) -> Result<(), PersistenceError> {
    set(conn, path, Value::Null)
}
