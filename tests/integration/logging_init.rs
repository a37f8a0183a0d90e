//! Installing the global subscriber from settings stored in a config tree.
//!
//! Only this test installs a subscriber; the global one can be set once
//! per process.

use std::fs;
use tempfile::TempDir;
use treeconf::logging::{init_logging, LoggingConfig};
use treeconf::{Config, LoggingError, Mapping};

#[test]
fn test_file_logging_from_tree_settings() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("treeconf.log");

    let mut settings = Config::empty();
    settings.set("logging.level", "info");
    settings.set("logging.format", "json");
    settings.set("logging.output", "file");
    settings.set("logging.file", log_file.to_string_lossy().to_string());
    settings.set("logging.modules.treeconf", "debug");

    let logging = LoggingConfig::from_tree(&settings, "logging");
    init_logging(Some(&logging)).unwrap();

    let mut config = Config::empty();
    let document: Mapping = serde_json::from_str(r#"{"db": {"host": "h"}}"#).unwrap();
    config.merge_map_recursive(&document);

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Merged mapping recursively"));
    assert!(contents.contains("treeconf::tree::merge"));

    let second = init_logging(Some(&logging));
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));
}
