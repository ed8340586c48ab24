//! Ordered in-memory store.

use std::collections::BTreeMap;

use crate::store::{Entries, Entry, Store};
use crate::Result;

/// In-memory store backed by a `BTreeMap`.
///
/// Keys iterate in ascending byte order, the same order a LevelDB pack
/// yields them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    name: String,
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store with the given pack name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    /// Create a store seeded with the given entries.
    pub fn with_entries<K, V, I>(name: impl Into<String>, entries: I) -> Self
    where
        K: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut store = Self::new(name);
        for (key, value) in entries {
            store.insert(key, value);
        }
        store
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove an entry, returning its value if it existed.
    pub fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.remove(key)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Store for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key).cloned())
    }

    fn entries(&self) -> Result<Entries<'_>> {
        Ok(Box::new(
            self.data
                .iter()
                .map(|(key, value)| Ok(Entry::new(key.clone(), value.clone()))),
        ))
    }
}
