//! Path resolution and storage: get, set, has, unset

use super::path::split_key;
use super::Config;
use crate::value::{Mapping, Value};
use tracing::trace;

impl Config {
    /// Look up the value stored at `key`.
    ///
    /// A branch node without a self value resolves to `None`, even when it
    /// has children. Only a local traversal miss delegates to the parent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.resolve(key)? {
            Value::Mapping(mapping) => mapping.self_value(),
            value => Some(value),
        }
    }

    /// True when `get(key)` would return a value, inherited ones included.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Store `value` at `key`, overwriting unconditionally.
    ///
    /// Any scalar or list sitting on the way to `key` is replaced by a
    /// mapping so the write can continue. The parent is never touched.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let mut node: &mut Mapping = &mut self.data;
        for segment in split_key(key, &self.delimiter) {
            node = node.child_mapping_mut(segment);
        }
        node.set_self_value(value);
        trace!(key, "Set config value");
    }

    /// Remove `key` and everything below it from local data.
    ///
    /// Missing paths are ignored. A shadowed parent value becomes visible
    /// again afterwards.
    pub fn unset(&mut self, key: &str) {
        let mut segments = split_key(key, &self.delimiter);
        let Some(last) = segments.pop() else {
            return;
        };

        let mut node: &mut Mapping = &mut self.data;
        for segment in segments {
            node = match node.get_mut(segment) {
                Some(Value::Mapping(mapping)) => mapping,
                _ => return,
            };
        }

        if node.remove(last).is_some() {
            trace!(key, "Unset config value");
        }
    }

    /// Raw node at `key`: local data first, then the parent chain.
    pub(crate) fn resolve(&self, key: &str) -> Option<&Value> {
        let segments = split_key(key, &self.delimiter);
        if let Some(value) = self.resolve_local(&segments) {
            return Some(value);
        }

        let parent = self.parent.as_ref()?;
        trace!(key, "Local miss, delegating to parent");
        parent.resolve(key)
    }

    fn resolve_local(&self, segments: &[&str]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.data.get(first)?;
        for segment in rest {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }
}
