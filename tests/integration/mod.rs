//! Integration tests for the treeconf configuration container

mod logging_init;
mod merge_strategies;
mod subtree_isolation;
