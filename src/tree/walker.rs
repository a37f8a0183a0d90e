//! Branch walker for enumerating leaf paths of a mapping tree

use super::path::join_segments;
use super::Config;
use crate::value::{Mapping, Value};
use tracing::debug;

/// A leaf reached by the walker
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<'a> {
    /// Full key from the walk root, segments joined by the delimiter
    pub path: String,
    /// Value stored at `path`
    pub value: &'a Value,
}

/// Walk `root` depth-first and collect every leaf in sibling order.
///
/// Scalars and lists are leaves; lists are never descended into. A mapping's
/// self value is emitted at the mapping's own path, before its children.
/// The walk root's own self value has no path and is skipped.
pub fn walk_leaves<'a>(root: &'a Mapping, delimiter: &str) -> Vec<Leaf<'a>> {
    let mut leaves = Vec::new();
    let mut segments = Vec::new();
    walk_mapping(root, delimiter, &mut segments, &mut leaves);
    leaves
}

fn walk_mapping<'a>(
    mapping: &'a Mapping,
    delimiter: &str,
    segments: &mut Vec<&'a str>,
    leaves: &mut Vec<Leaf<'a>>,
) {
    // A self value is one leaf even when it is a whole mapping from
    // `merge_map`, so `merge` copies it back as the same single value.
    if let Some(value) = mapping.self_value() {
        if !segments.is_empty() {
            leaves.push(Leaf {
                path: join_segments(segments.as_slice(), delimiter),
                value,
            });
        }
    }

    for (name, value) in mapping.iter() {
        segments.push(name);
        match value {
            Value::Mapping(child) => walk_mapping(child, delimiter, segments, leaves),
            Value::List(_) | Value::Scalar(_) => leaves.push(Leaf {
                path: join_segments(segments.as_slice(), delimiter),
                value,
            }),
        }
        segments.pop();
    }
}

impl Config {
    /// Every key holding a value in local data, depth-first in insertion
    /// order. The parent chain is never visited.
    pub fn keys(&self) -> Vec<String> {
        let keys: Vec<String> = walk_leaves(&self.data, &self.delimiter)
            .into_iter()
            .map(|leaf| leaf.path)
            .collect();
        debug!(key_count = keys.len(), "Enumerated config keys");
        keys
    }
}
