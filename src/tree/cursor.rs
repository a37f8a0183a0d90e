//! Restartable iteration cursor over a config's local keys

use super::Config;
use crate::value::Value;
use std::iter::FusedIterator;

/// Forward-only cursor over a snapshot of `Config::keys`.
///
/// `rewind` takes a fresh snapshot and moves to the first key; `advance`
/// steps forward until the cursor is exhausted. As an `Iterator`, each call
/// to `next` yields the current `(key, value)` pair and then advances.
///
/// The cursor borrows its config, so the config cannot change mid-walk.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    config: &'a Config,
    keys: Vec<String>,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        let mut cursor = Self {
            config,
            keys: Vec::new(),
            position: 0,
        };
        cursor.rewind();
        cursor
    }

    /// Take a fresh key snapshot and move to the first key.
    pub fn rewind(&mut self) {
        self.keys = self.config.keys();
        self.position = 0;
    }

    /// Move to the next key; a no-op once exhausted.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.position += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.keys.len()
    }

    /// Key under the cursor, `None` once exhausted
    pub fn key(&self) -> Option<&str> {
        self.keys.get(self.position).map(String::as_str)
    }

    /// Value under the cursor, resolved with `Config::get`
    pub fn current(&self) -> Option<&'a Value> {
        let config = self.config;
        config.get(self.key()?)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.get(self.position)?;
        let value = self.config.get(key)?;
        self.position += 1;
        Some((key.clone(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.keys.len().saturating_sub(self.position)))
    }
}

impl FusedIterator for Cursor<'_> {}

impl Config {
    /// Cursor positioned at the first local key.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Iterate `(key, value)` pairs for every local key.
    pub fn iter(&self) -> Cursor<'_> {
        self.cursor()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (String, &'a Value);
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
