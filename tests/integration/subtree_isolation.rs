//! Detached sub-trees handed to independent owners

use std::sync::Arc;
use treeconf::{Config, Value};

#[test]
fn test_sub_tree_isolated_both_ways() {
    let mut root = Config::empty();
    root.set("db.host", "h");
    root.set("db.port", 5432);
    let parent = Arc::new(root);

    let mut config = parent.child();
    config.set("db.user", "svc");

    // local "db" branch wins, so only the local user is copied
    let mut db = config.sub_tree("db");
    assert_eq!(db.keys(), vec!["user"]);

    db.set("user", "other");
    db.set("host", "elsewhere");
    assert_eq!(config.get("db.user"), Some(&Value::from("svc")));
    assert_eq!(config.get("db.host"), Some(&Value::from("h")));

    config.set("db.user", "changed");
    assert_eq!(db.get("user"), Some(&Value::from("other")));
}

#[test]
fn test_inherited_sub_tree_copied_when_local_miss() {
    let mut root = Config::empty();
    root.set("db.host", "h");
    root.set("db.port", 5432);
    let parent = Arc::new(root);

    let config = parent.child();
    let mut db = config.sub_tree("db");
    db.set("host", "mutated");

    assert_eq!(db.get("port"), Some(&Value::from(5432)));
    assert_eq!(parent.get("db.host"), Some(&Value::from("h")));
    assert_eq!(config.get("db.host"), Some(&Value::from("h")));
}

#[test]
fn test_sub_tree_moves_to_another_thread() {
    let mut config = Config::empty();
    config.set("worker.pool.size", 8);
    config.set("worker.name", "w1");

    let worker = config.sub_tree("worker");
    let handle = std::thread::spawn(move || {
        let mut worker = worker;
        worker.set("pool.size", 16);
        worker.get("pool.size").and_then(Value::as_i64)
    });

    assert_eq!(handle.join().unwrap(), Some(16));
    assert_eq!(config.get("worker.pool.size"), Some(&Value::from(8)));
}

#[test]
fn test_nested_sub_tree_of_sub_tree() {
    let mut config = Config::empty();
    config.set("a.b.c.d", 1);

    let b = config.sub_tree("a.b");
    let c = b.sub_tree("c");

    assert_eq!(c.get("d"), Some(&Value::from(1)));
    assert_eq!(config.sub_tree("a").sub_tree("b").keys(), b.keys());
}
