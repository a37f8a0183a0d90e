//! Hierarchical Configuration Tree
//!
//! A `Config` stores values in a tree of mappings addressed by
//! delimiter-separated keys. Reads that miss locally fall back to an
//! optional parent, which is shared through an `Arc` and therefore never
//! mutated by its children. Writes only ever touch local data.

mod access;
mod cursor;
mod merge;
pub mod path;
mod subtree;
pub mod walker;

pub use cursor::Cursor;

use crate::error::ConfigError;
use crate::value::Mapping;
use std::sync::Arc;

/// Default key delimiter
pub const DEFAULT_DELIMITER: &str = ".";

/// Path-addressed configuration container
#[derive(Debug, Clone)]
pub struct Config {
    data: Mapping,
    delimiter: String,
    parent: Option<Arc<Config>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    /// Create a parentless root using the default `.` delimiter.
    pub fn empty() -> Self {
        Self::root(DEFAULT_DELIMITER.to_string())
    }

    /// Create a parentless root splitting keys on `delimiter`.
    pub fn with_delimiter(delimiter: &str) -> Result<Self, ConfigError> {
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self::root(delimiter.to_string()))
    }

    /// Create an empty config whose reads fall back to `parent`.
    ///
    /// The child inherits the parent's delimiter.
    pub fn from_parent(parent: &Arc<Config>) -> Self {
        Self {
            data: Mapping::new(),
            delimiter: parent.delimiter.clone(),
            parent: Some(Arc::clone(parent)),
        }
    }

    /// Create an empty child of this config.
    pub fn child(self: &Arc<Self>) -> Self {
        Self::from_parent(self)
    }

    pub(crate) fn root(delimiter: String) -> Self {
        Self {
            data: Mapping::new(),
            delimiter,
            parent: None,
        }
    }

    pub fn parent(&self) -> Option<&Arc<Config>> {
        self.parent.as_ref()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Local data, excluding anything inherited from the parent chain
    pub fn data(&self) -> &Mapping {
        &self.data
    }

    /// True when nothing is stored locally
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop all local data. The parent chain is untouched, so inherited
    /// values become visible again.
    pub fn clear_level(&mut self) {
        self.data.clear();
    }
}
