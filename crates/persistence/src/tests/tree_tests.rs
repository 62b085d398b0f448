// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Map, Value, json};

use crate::error::PersistenceError;
use crate::tree;

#[test]
fn test_segments_ignore_outer_slashes() {
    assert_eq!(
        tree::segments("/athletes/jane-runner/").unwrap(),
        vec!["athletes", "jane-runner"]
    );
}

#[test]
fn test_segments_reject_empty_paths() {
    for bad in ["", "/", "athletes//jane", "athletes/ /jane"] {
        assert!(
            matches!(tree::segments(bad), Err(PersistenceError::InvalidPath(_))),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn test_insert_creates_intermediate_objects() {
    let mut root: Value = json!({});
    tree::insert(&mut root, &["seasons", "archived", "2025"], json!({"year": 2025}));
    assert_eq!(root, json!({"seasons": {"archived": {"2025": {"year": 2025}}}}));
}

#[test]
fn test_insert_null_removes_and_prunes_parents() {
    let mut root: Value = json!({"seasons": {"archived": {"2025": {"year": 2025}}}, "meets": {}});
    tree::insert(&mut root, &["seasons", "archived", "2025"], Value::Null);
    assert_eq!(root, json!({"meets": {}}));
}

#[test]
fn test_remove_keeps_siblings() {
    let mut root: Value = json!({"athletes": {"a": 1, "b": 2}});
    let emptied: bool = tree::remove(&mut root, &["athletes", "a"]);
    assert!(!emptied);
    assert_eq!(root, json!({"athletes": {"b": 2}}));
}

#[test]
fn test_merge_accepts_nested_field_paths() {
    let mut node: Value = json!({"name": "Jane", "graduationYear": 2026});
    let mut fields: Map<String, Value> = Map::new();
    fields.insert("graduationYear".to_string(), json!(2025));
    fields.insert("history/advanced".to_string(), json!(true));
    tree::merge(&mut node, fields).unwrap();
    assert_eq!(
        node,
        json!({"name": "Jane", "graduationYear": 2025, "history": {"advanced": true}})
    );
}

#[test]
fn test_filter_children_matches_field_value() {
    let node: Value = json!({
        "a": {"graduationYear": 2025},
        "b": {"graduationYear": 2026},
        "c": {"graduationYear": 2025}
    });
    let keys: Vec<String> = tree::filter_children(Some(node), "graduationYear", &json!(2025))
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn test_filter_children_of_missing_node_is_empty() {
    assert!(tree::filter_children(None, "meetSlug", &json!("x")).is_empty());
}
