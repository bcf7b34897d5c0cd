//! Ordered mapping from directory path to navigation entries

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::entry::NavEntry;

/// Relative path used for the scan root in a [`ContentMap`].
pub const ROOT_KEY: &str = ".";

/// Directory path (relative to the scan root, `/`-separated) to the flattened
/// entry list of that directory's index.
///
/// Keys keep insertion order. Inserting a key that is already present
/// replaces its entries without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    entries: Vec<(String, Vec<NavEntry>)>,
    /// Position of each key in `entries`
    index: HashMap<String, usize>,
}

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entries for `dir`, returning the previous ones.
    pub fn insert(&mut self, dir: impl Into<String>, list: Vec<NavEntry>) -> Option<Vec<NavEntry>> {
        let dir = dir.into();
        match self.index.get(&dir).copied() {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].1, list)),
            None => {
                self.index.insert(dir.clone(), self.entries.len());
                self.entries.push((dir, list));
                None
            }
        }
    }

    /// Move every key of `other` into this map, in order.
    pub fn merge(&mut self, other: ContentMap) {
        for (dir, list) in other.entries {
            self.insert(dir, list);
        }
    }

    pub fn get(&self, dir: &str) -> Option<&[NavEntry]> {
        self.index
            .get(dir)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains_key(&self, dir: &str) -> bool {
        self.get(dir).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.entries
            .iter()
            .map(|(key, list)| (key.as_str(), list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ContentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, list)| (key, list)))
    }
}
