//! The store abstraction shared by every backend.

use crate::{Error, Result};

/// A raw key/value pair read from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw key bytes.
    pub key: Vec<u8>,
    /// Raw value bytes.
    pub value: Vec<u8>,
}

impl Entry {
    /// Create an entry from anything byte-like.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered forward iterator over the entries of a store.
pub type Entries<'a> = Box<dyn Iterator<Item = Result<Entry>> + 'a>;

/// Read-only access to an ordered key-value store.
///
/// Implementations yield entries in ascending byte order of their keys.
/// Lookups may be issued while a scan returned by [`Store::entries`] is
/// still being consumed.
pub trait Store {
    /// Name of the pack this store holds.
    fn name(&self) -> &str;

    /// Look up a single key. Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Start an ordered full scan over every entry.
    fn entries(&self) -> Result<Entries<'_>>;

    /// Check whether a key is present.
    fn contains(&self, key: &[u8]) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Visit every entry in order.
    ///
    /// Stops at and returns the first error, whether it comes from the
    /// store itself or from the visitor.
    fn iterate_all<F, E>(&self, mut visit: F) -> std::result::Result<(), E>
    where
        Self: Sized,
        F: FnMut(&[u8], &[u8]) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        for entry in self.entries()? {
            let entry = entry?;
            visit(&entry.key, &entry.value)?;
        }

        Ok(())
    }
}
