//! Store access for Foundry VTT compendium packs.
//!
//! A pack is an ordered, flat key-value database. This crate exposes the
//! small surface the rest of vttpack needs from it:
//!
//! - [`Store`] - point lookups and an ordered forward scan
//! - [`LevelDbStore`] - a pack directory opened through LevelDB (`leveldb` feature)
//! - [`MemoryStore`] - an ordered in-memory store
//!
//! # Example
//!
//! ```no_run
//! use vttpack_store::{LevelDbStore, Store};
//!
//! let store = LevelDbStore::open("packs/monsters")?;
//!
//! for entry in store.entries()? {
//!     let entry = entry?;
//!     println!("{}: {} bytes", String::from_utf8_lossy(&entry.key), entry.value.len());
//! }
//! # Ok::<(), vttpack_store::Error>(())
//! ```

mod error;
mod memory;
mod store;

#[cfg(feature = "leveldb")]
mod leveldb;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use store::{Entries, Entry, Store};

#[cfg(feature = "leveldb")]
pub use leveldb::LevelDbStore;
