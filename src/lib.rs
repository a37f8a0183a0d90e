//! Treeconf: Hierarchical Path-Addressed Configuration
//!
//! A tree of named values accessed through delimiter-separated keys, with
//! read-only inheritance from a parent config, detached subtree extraction,
//! local key enumeration and four merge policies.

pub mod error;
pub mod logging;
pub mod tree;
pub mod value;

pub use error::{ConfigError, LoggingError};
pub use tree::{Config, Cursor};
pub use value::{Mapping, Scalar, Value};
