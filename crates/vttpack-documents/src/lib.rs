//! Foundry VTT document model for compendium packs.
//!
//! A pack stores documents as flat key/value pairs. Primary documents live
//! under `!<collection>!<id>`; documents embedded in a parent (an actor's
//! items, a scene's tokens) live under
//! `!<collection>.<subcollection>!<parentId>.<childId>` and are only
//! reachable through their parent.
//!
//! # Pipeline
//!
//! ```no_run
//! use vttpack_documents::{decode_primary, hydrate, DocumentExporter, DocumentKey, Format};
//! use vttpack_store::{LevelDbStore, Store};
//!
//! let store = LevelDbStore::open("packs/monsters")?;
//! let exporter = DocumentExporter::new(Format::Json);
//!
//! for entry in store.entries()? {
//!     let entry = entry?;
//!
//!     // Skip malformed keys and embedded records
//!     let Some(key) = DocumentKey::parse_primary(&entry.key) else { continue };
//!
//!     let document = decode_primary(store.name(), &key, &entry.value)?;
//!     let hydrated = hydrate(document, &store);
//!     exporter.write(&hydrated.document, "_pack_sources/monsters".as_ref())?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`key`] - parsing and building store keys
//! - [`registry`] - collection tag to [`DocumentKind`] mapping
//! - [`model`] - the document variants
//! - [`mod@hydrate`] - resolving embedded collections
//! - [`export`] - file naming and serialization

mod decode;
mod error;
mod format;

pub mod export;
pub mod hydrate;
pub mod key;
pub mod model;
pub mod registry;

pub use decode::decode_primary;
pub use error::{Error, FormatError, Result};
pub use export::{export_name, sanitize, DocumentExporter};
pub use format::Format;
pub use hydrate::{hydrate, Hydrated};
pub use key::DocumentKey;
pub use model::{Document, DocumentData, EmbeddedCollection};
pub use registry::{constructor_for, DocumentKind};
