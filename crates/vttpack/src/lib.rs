//! vttpack - Foundry VTT compendium pack unpacking library.
//!
//! This crate ties the vttpack crates together: it finds pack stores under
//! a directory and turns every primary document in them into one JSON or
//! YAML file.
//!
//! # Crates
//!
//! - [`vttpack_store`] - read access to pack key/value stores
//! - [`vttpack_documents`] - keys, document variants, hydration and export
//!
//! # Example
//!
//! ```no_run
//! use vttpack::prelude::*;
//!
//! let unpacker = PackUnpacker::new(UnpackOptions {
//!     format: Format::Yaml,
//!     ..UnpackOptions::default()
//! });
//!
//! for pack in discover_packs("packs".as_ref())? {
//!     let stats = unpacker.unpack_dir(&pack, |_| {})?;
//!     println!("{}: {} documents", pack.name, stats.written);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod discover;
mod error;
mod unpack;

// Re-export all sub-crates
pub use vttpack_documents as documents;
pub use vttpack_store as store;

pub use discover::{discover_packs, PackDir};
pub use error::{Error, Result};
pub use unpack::{PackUnpacker, UnpackOptions, UnpackStats, DEFAULT_OUTPUT_ROOT};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{discover_packs, PackDir, PackUnpacker, UnpackOptions, UnpackStats};
    pub use vttpack_documents::{Document, DocumentExporter, DocumentKey, Format};
    #[cfg(feature = "leveldb")]
    pub use vttpack_store::LevelDbStore;
    pub use vttpack_store::{MemoryStore, Store};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
