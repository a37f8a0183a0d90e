//! Merge strategies
//!
//! Four policies, each performing plain `set` calls on local data:
//! - `merge`: every local leaf of another config, overwriting
//! - `merge_map`: top-level entries of a mapping, overwriting, not flattened
//! - `union_map`: top-level entries of a mapping, only where `has` is false
//!   (inherited values count as present)
//! - `merge_map_recursive`: every leaf of a mapping, flattened, overwriting
//!
//! Each returns the number of writes it performed.

use super::walker::walk_leaves;
use super::Config;
use crate::value::Mapping;
use tracing::{debug, instrument};

impl Config {
    /// Copy every locally stored leaf of `other` into this config.
    ///
    /// Only `other`'s own data is read, never its parent chain.
    #[instrument(skip_all)]
    pub fn merge(&mut self, other: &Config) -> usize {
        let mut writes = 0;
        for key in other.keys() {
            if let Some(value) = other.get(&key) {
                self.set(&key, value.clone());
                writes += 1;
            }
        }
        debug!(writes, "Merged config");
        writes
    }

    /// Store each top-level entry of `map` under its key, overwriting.
    ///
    /// Nested mappings are stored verbatim as a single value.
    #[instrument(skip_all, fields(entries = map.len()))]
    pub fn merge_map(&mut self, map: Mapping) -> usize {
        let mut writes = 0;
        for (key, value) in map {
            self.set(&key, value);
            writes += 1;
        }
        debug!(writes, "Merged mapping");
        writes
    }

    /// Store each top-level entry of `map` whose key is not yet present.
    ///
    /// Presence is checked with `has`, so a key inherited from the parent
    /// chain blocks the write even though it is absent locally.
    #[instrument(skip_all, fields(entries = map.len()))]
    pub fn union_map(&mut self, map: Mapping) -> usize {
        let mut writes = 0;
        for (key, value) in map {
            if !self.has(&key) {
                self.set(&key, value);
                writes += 1;
            }
        }
        debug!(writes, "United mapping");
        writes
    }

    /// Flatten `map` into leaf paths and store each leaf, overwriting.
    ///
    /// Lists are stored whole; only nested mappings are descended.
    #[instrument(skip_all, fields(entries = map.len()))]
    pub fn merge_map_recursive(&mut self, map: &Mapping) -> usize {
        let leaves = walk_leaves(map, &self.delimiter);
        let writes = leaves.len();
        for leaf in leaves {
            self.set(&leaf.path, leaf.value.clone());
        }
        debug!(writes, "Merged mapping recursively");
        writes
    }
}
