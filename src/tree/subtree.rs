//! Detached subtree extraction

use super::Config;
use crate::value::{Mapping, Value};
use tracing::debug;

impl Config {
    /// Copy the branch at `key` out into a new parentless root.
    ///
    /// The branch is found the same way `get` finds values, so an inherited
    /// branch is copied when the key misses locally. A missing key, or one
    /// holding a scalar or list, yields an empty root. The result shares no
    /// storage with `self`.
    pub fn sub_tree(&self, key: &str) -> Config {
        let mut detached = Config::root(self.delimiter.clone());
        match self.resolve(key) {
            Some(Value::Mapping(branch)) => {
                detached.data = detached_copy(branch);
                debug!(key, child_count = detached.data.len(), "Extracted sub-tree");
            }
            Some(_) => debug!(key, "Sub-tree key holds a leaf, returning empty config"),
            None => debug!(key, "Sub-tree key not found, returning empty config"),
        }
        detached
    }
}

/// A root cannot be addressed by key, so the branch's own value is dropped.
fn detached_copy(branch: &Mapping) -> Mapping {
    let mut data = branch.clone();
    data.take_self_value();
    data
}
