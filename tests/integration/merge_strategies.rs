//! The four merge policies side by side on the same input

use serde_json::json;
use std::sync::Arc;
use treeconf::{Config, Mapping, Value};

fn input() -> Mapping {
    serde_json::from_value(json!({
        "x": "z",
        "db": {"host": "h", "port": 5432},
        "tags": ["a", "b"]
    }))
    .unwrap()
}

fn child_with_inherited_x() -> Config {
    let mut root = Config::empty();
    root.set("x", "a");
    Arc::new(root).child()
}

#[test]
fn test_merge_map_overwrites_top_level() {
    let mut config = child_with_inherited_x();
    config.merge_map(input());

    assert_eq!(config.get("x"), Some(&Value::from("z")));
    assert!(config.get("db").unwrap().is_mapping());
    assert!(config.get("db.host").is_none());
    assert_eq!(config.get("tags"), Some(&Value::from(vec!["a", "b"])));
}

#[test]
fn test_union_map_blocked_by_inherited_key() {
    let mut config = child_with_inherited_x();
    let writes = config.union_map(input());

    assert_eq!(writes, 2);
    assert_eq!(config.get("x"), Some(&Value::from("a")));
    assert!(!config.keys().contains(&"x".to_string()));
    assert!(config.get("db").unwrap().is_mapping());
}

#[test]
fn test_merge_map_recursive_flattens_leaves() {
    let mut config = child_with_inherited_x();
    config.merge_map_recursive(&input());

    assert_eq!(config.get("x"), Some(&Value::from("z")));
    assert_eq!(config.get("db.host"), Some(&Value::from("h")));
    assert_eq!(config.get("db.port"), Some(&Value::from(5432)));
    assert!(config.get("db").is_none());

    let mut keys = config.keys();
    keys.sort();
    assert_eq!(keys, vec!["db.host", "db.port", "tags", "x"]);
}

#[test]
fn test_merge_config_equals_recursive_map_merge() {
    let mut source = Config::empty();
    source.merge_map_recursive(&input());

    let mut via_config = Config::empty();
    via_config.merge(&source);

    let mut via_map = Config::empty();
    via_map.merge_map_recursive(&input());

    assert_eq!(via_config.keys(), via_map.keys());
    for key in via_map.keys() {
        assert_eq!(via_config.get(&key), via_map.get(&key));
    }
}

#[test]
fn test_toml_document_merged_recursively() {
    let document: toml::Value = toml::from_str(
        r#"
overall_seconds = 900

[cache]
derived_data = "on"

[workers]
tags = ["macos", "xcode"]
"#,
    )
    .unwrap();
    let Value::Mapping(document) = Value::from(document) else {
        panic!("toml document is a table");
    };

    let mut config = Config::empty();
    config.set("cache.spm", "off");
    config.merge_map_recursive(&document);

    assert_eq!(config.get("overall_seconds"), Some(&Value::from(900)));
    assert_eq!(config.get("cache.derived_data"), Some(&Value::from("on")));
    assert_eq!(config.get("cache.spm"), Some(&Value::from("off")));
    assert_eq!(
        config.get("workers.tags"),
        Some(&Value::from(vec!["macos", "xcode"]))
    );
}

#[test]
fn test_parsed_documents_keep_written_key_order() {
    let document: Mapping =
        serde_json::from_str(r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}}"#).unwrap();
    let mut config = Config::empty();
    config.merge_map_recursive(&document);
    assert_eq!(config.keys(), vec!["zeta", "alpha.y", "alpha.b"]);

    let Value::Mapping(document) = Value::from(json!({"zeta": 1, "alpha": 2})) else {
        panic!("json document is an object");
    };
    let names: Vec<_> = document.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);

    let parsed: toml::Value = toml::from_str("zeta = 1\nalpha = 2\n").unwrap();
    let Value::Mapping(document) = Value::from(parsed) else {
        panic!("toml document is a table");
    };
    let mut config = Config::empty();
    config.merge_map_recursive(&document);
    assert_eq!(config.keys(), vec!["zeta", "alpha"]);
}
