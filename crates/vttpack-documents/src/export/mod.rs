//! Export of documents to files.
//!
//! [`export_name`] derives a collision-free, filesystem-safe file name and
//! [`DocumentExporter`] renders documents and writes them beneath an output
//! directory.

mod naming;
mod serializer;

pub use naming::{export_name, sanitize};
pub use serializer::DocumentExporter;
