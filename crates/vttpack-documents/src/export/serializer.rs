//! Rendering documents to JSON/YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use super::export_name;
use crate::format::Format;
use crate::model::Document;
use crate::{Error, Result};

/// Renders documents and writes them to an output directory.
///
/// Field order follows the declaration order of each variant and free-form
/// maps are written with sorted keys, so identical input always produces
/// byte-identical files.
#[derive(Debug, Clone, Copy)]
pub struct DocumentExporter {
    format: Format,
}

impl DocumentExporter {
    /// Create an exporter for the given format.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Output format.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// File name the document will be written under.
    #[inline]
    pub fn file_name(&self, document: &Document) -> String {
        export_name(document, self.format)
    }

    /// Render a document, including its trailing newline.
    pub fn render(&self, document: &Document) -> Result<Vec<u8>> {
        self.format.to_vec(document).map_err(|source| Error::Render {
            key: document.key().to_string(),
            source,
        })
    }

    /// Write a document beneath `destination`, creating the directory if
    /// needed. Existing files with the same name are overwritten.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, document: &Document, destination: &Path) -> Result<PathBuf> {
        fs::create_dir_all(destination).map_err(|source| Error::Write {
            path: destination.to_path_buf(),
            source,
        })?;

        let bytes = self.render(document)?;
        let path = destination.join(self.file_name(document));

        fs::write(&path, bytes).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_primary;
    use crate::hydrate::hydrate;
    use crate::key::DocumentKey;
    use crate::registry::DocumentKind;
    use vttpack_store::{MemoryStore, Store};

    fn hydrated_orc() -> Document {
        let store = MemoryStore::with_entries(
            "monsters",
            [
                (
                    "!actors!A1",
                    r#"{"_id":"A1","name":"Orc","type":"npc","system":{"hp":{"value":7,"max":15}},
                        "prototypeToken":{"name":"Orc","width":1,"texture":{"src":"orc.webp","scaleX":1}},
                        "items":["I1","I2"],"effects":[],"folder":"F1","sort":100,
                        "ownership":{"default":0},"flags":{"core":{"sheetClass":""}},
                        "_stats":{"coreVersion":"12.331","createdTime":1700000000000}}"#,
                ),
                ("!actors.items!A1.I1", r#"{"_id":"I1","name":"Axe","type":"weapon","system":{"damage":"1d8"}}"#),
            ],
        );

        let raw = store.get(b"!actors!A1").unwrap().unwrap();
        let doc = decode_primary("monsters", &DocumentKey::primary("actors", "A1"), &raw).unwrap();
        hydrate(doc, &store).document
    }

    fn reload(format: Format, bytes: &[u8], pack: &str) -> Document {
        let mut doc = DocumentKind::Actor.decode(format, bytes).unwrap();
        doc.set_pack(pack);
        doc
    }

    #[test]
    fn test_json_field_order() {
        let exporter = DocumentExporter::new(Format::Json);
        let text = String::from_utf8(exporter.render(&hydrated_orc()).unwrap()).unwrap();

        assert!(text.starts_with("{\n  \"_key\": \"!actors!A1\",\n  \"_id\": \"A1\",\n  \"name\": \"Orc\",\n  \"img\""));
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));

        let img = text.find("\"img\"").unwrap();
        let items = text.find("\"items\"").unwrap();
        let stats = text.find("\"_stats\"").unwrap();
        assert!(img < items && items < stats);
    }

    #[test]
    fn test_unresolved_children_written_as_ids() {
        let exporter = DocumentExporter::new(Format::Json);
        let value: serde_json::Value =
            serde_json::from_slice(&exporter.render(&hydrated_orc()).unwrap()).unwrap();

        let items = value["items"].as_array().unwrap();
        assert_eq!(items[0]["name"], "Axe");
        assert_eq!(items[0]["_key"], "!actors.items!A1.I1");
        assert_eq!(items[1], "I2");
    }

    #[test]
    fn test_json_round_trip() {
        let original = hydrated_orc();
        let bytes = DocumentExporter::new(Format::Json).render(&original).unwrap();
        assert_eq!(reload(Format::Json, &bytes, "monsters"), original);
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = hydrated_orc();
        let bytes = DocumentExporter::new(Format::Yaml).render(&original).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.starts_with("_key: "));
        assert!(text.contains("\n_id: A1\nname: Orc\n"));
        assert_eq!(reload(Format::Yaml, &bytes, "monsters"), original);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("_pack_sources").join("monsters");

        let exporter = DocumentExporter::new(Format::Json);
        let path = exporter.write(&hydrated_orc(), &destination).unwrap();

        assert_eq!(path, destination.join("Orc_A1.json"));
        let first = fs::read(&path).unwrap();

        exporter.write(&hydrated_orc(), &destination).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_write_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let result = DocumentExporter::new(Format::Json).write(&hydrated_orc(), &blocker);
        assert!(matches!(result, Err(Error::Write { .. })));
    }
}
