//! The per-pack unpack pass.
//!
//! Records are processed strictly in store order, one at a time: parse the
//! key, decode primary documents, hydrate their embedded collections and
//! write them out. A failing record is logged and skipped; only store-level
//! failures end a pack's pass early.

use std::path::{Path, PathBuf};

use vttpack_documents::{decode_primary, hydrate, DocumentExporter, DocumentKey, Format};
use vttpack_store::Store;

use crate::discover::PackDir;
use crate::Result;

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_ROOT: &str = "_pack_sources";

/// Settings for an unpack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Format documents are written in.
    pub format: Format,
    /// Directory under which one subdirectory per pack is created.
    pub output_root: PathBuf,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            format: Format::Json,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

/// Counters for one pack's pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackStats {
    /// Entries read from the store.
    pub processed: usize,
    /// Documents written.
    pub written: usize,
    /// Keys skipped because they address embedded records.
    pub skipped_secondary: usize,
    /// Keys skipped because they could not be parsed.
    pub skipped_malformed: usize,
    /// Records with no registered document variant.
    pub unknown_collection: usize,
    /// Records whose value could not be decoded.
    pub decode_failures: usize,
    /// Embedded documents that could not be resolved.
    pub hydration_failures: usize,
    /// Documents that could not be written.
    pub write_failures: usize,
}

impl UnpackStats {
    /// Records that were primary documents but did not produce a file.
    pub fn skipped_documents(&self) -> usize {
        self.unknown_collection + self.decode_failures + self.write_failures
    }

    /// Check if every primary document was written with all its children.
    pub fn is_complete(&self) -> bool {
        self.skipped_documents() == 0 && self.hydration_failures == 0
    }
}

/// Unpacks pack stores into per-pack output directories.
#[derive(Debug, Clone)]
pub struct PackUnpacker {
    options: UnpackOptions,
    exporter: DocumentExporter,
}

impl PackUnpacker {
    /// Create an unpacker with the given options.
    pub fn new(options: UnpackOptions) -> Self {
        let exporter = DocumentExporter::new(options.format);
        Self { options, exporter }
    }

    /// Options in use.
    #[inline]
    pub fn options(&self) -> &UnpackOptions {
        &self.options
    }

    /// Output directory for a pack.
    pub fn destination_for(&self, pack: &str) -> PathBuf {
        self.options.output_root.join(pack)
    }

    /// Unpack every primary document of a store.
    pub fn unpack<S: Store>(&self, store: &S) -> Result<UnpackStats> {
        self.unpack_with_progress(store, |_| {})
    }

    /// Unpack a store, calling `progress` after every entry.
    pub fn unpack_with_progress<S, F>(&self, store: &S, mut progress: F) -> Result<UnpackStats>
    where
        S: Store,
        F: FnMut(&UnpackStats),
    {
        let pack = store.name();
        let destination = self.destination_for(pack);
        let mut stats = UnpackStats::default();

        tracing::info!(pack, destination = %destination.display(), format = %self.options.format, "unpacking");

        store.iterate_all(|raw_key, value| -> Result<()> {
            stats.processed += 1;
            self.unpack_entry(store, &destination, raw_key, value, &mut stats);
            progress(&stats);
            Ok(())
        })?;

        tracing::info!(
            pack,
            written = stats.written,
            skipped = stats.skipped_documents(),
            hydration_failures = stats.hydration_failures,
            "unpacked"
        );

        Ok(stats)
    }

    /// Open a pack directory and unpack it.
    #[cfg(feature = "leveldb")]
    pub fn unpack_dir<F>(&self, pack: &PackDir, progress: F) -> Result<UnpackStats>
    where
        F: FnMut(&UnpackStats),
    {
        let store = vttpack_store::LevelDbStore::open(&pack.path)?;
        self.unpack_with_progress(&store, progress)
    }

    fn unpack_entry<S: Store>(
        &self,
        store: &S,
        destination: &Path,
        raw_key: &[u8],
        value: &[u8],
        stats: &mut UnpackStats,
    ) {
        let pack = store.name();

        let Some(key) = DocumentKey::parse(raw_key) else {
            stats.skipped_malformed += 1;
            return;
        };

        if !key.is_primary() {
            stats.skipped_secondary += 1;
            return;
        }

        tracing::debug!(pack, key = %key, "processing");

        let document = match decode_primary(pack, &key, value) {
            Ok(document) => document,
            Err(e @ vttpack_documents::Error::StructureNotFound(_)) => {
                tracing::warn!(pack, key = %key, error = %e, "unknown collection type, skipping");
                stats.unknown_collection += 1;
                return;
            }
            Err(e) => {
                tracing::warn!(pack, key = %key, error = %e, "cannot decode document, skipping");
                stats.decode_failures += 1;
                return;
            }
        };

        let hydrated = hydrate(document, store);
        for failure in &hydrated.failures {
            tracing::warn!(pack, key = %key, error = %failure, "cannot hydrate embedded document");
        }
        stats.hydration_failures += hydrated.failures.len();

        match self.exporter.write(&hydrated.document, destination) {
            Ok(path) => {
                tracing::debug!(pack, key = %key, path = %path.display(), "written");
                stats.written += 1;
            }
            Err(e) => {
                tracing::warn!(pack, key = %key, error = %e, "cannot serialize document");
                stats.write_failures += 1;
            }
        }
    }
}

impl Default for PackUnpacker {
    fn default() -> Self {
        Self::new(UnpackOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use serde_json::Value;
    use vttpack_store::MemoryStore;

    fn unpacker(root: &Path, format: Format) -> PackUnpacker {
        PackUnpacker::new(UnpackOptions {
            format,
            output_root: root.to_path_buf(),
        })
    }

    fn read_json(path: PathBuf) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn test_folder_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "monsters",
            [("!folders!F1", r#"{"_id":"F1","name":"Monsters"}"#)],
        );

        let stats = unpacker(dir.path(), Format::Json).unpack(&store).unwrap();
        assert_eq!(stats.written, 1);
        assert!(stats.is_complete());

        let written = read_json(dir.path().join("monsters").join("Monsters_F1.json"));
        assert_eq!(written["_key"], "!folders!F1");
        assert_eq!(written["_id"], "F1");
        assert_eq!(written["name"], "Monsters");
    }

    #[test]
    fn test_actor_with_items_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::with_entries(
            "monsters",
            [
                ("!actors!A1", r#"{"_id":"A1","name":"Orc","items":["I1"]}"#),
                ("!actors.items!A1.I1", r#"{"_id":"I1","name":"Axe"}"#),
            ],
        );
        let unpacker = unpacker(dir.path(), Format::Json);
        let path = dir.path().join("monsters").join("Orc_A1.json");

        let stats = unpacker.unpack(&store).unwrap();
        assert_eq!(stats.written, 1);
        assert_eq!(stats.skipped_secondary, 1);
        assert_eq!(read_json(path.clone())["items"][0]["name"], "Axe");

        store.remove(b"!actors.items!A1.I1");
        let stats = unpacker.unpack(&store).unwrap();
        assert_eq!(stats.written, 1);
        assert_eq!(stats.hydration_failures, 1);

        // The unresolved item stays referenced by id only.
        let items = read_json(path)["items"].clone();
        assert_eq!(items, serde_json::json!(["I1"]));
    }

    #[test]
    fn test_unknown_collection_does_not_stop_iteration() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "misc",
            [
                ("!actors!A1", r#"{"_id":"A1","name":"Orc"}"#),
                ("!items!I1", r#"{"_id":"I1","name":"Axe"}"#),
                ("!widgets!X1", r#"{"_id":"X1","name":"Gadget"}"#),
            ],
        );

        let stats = unpacker(dir.path(), Format::Json).unpack(&store).unwrap();
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.unknown_collection, 1);
        assert_eq!(stats.written, 2);
        assert!(dir.path().join("misc").join("Axe_I1.json").exists());
        assert!(!dir.path().join("misc").join("Gadget_X1.json").exists());
    }

    #[test]
    fn test_duplicate_names_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "monsters",
            [
                ("!actors!A1", r#"{"_id":"A1","name":"Orc"}"#),
                ("!actors!A2", r#"{"_id":"A2","name":"Orc"}"#),
            ],
        );

        unpacker(dir.path(), Format::Json).unpack(&store).unwrap();
        assert_eq!(read_json(dir.path().join("monsters/Orc_A1.json"))["_id"], "A1");
        assert_eq!(read_json(dir.path().join("monsters/Orc_A2.json"))["_id"], "A2");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "misc",
            [
                ("!actors!A1", "{broken"),
                ("!items!I1", r#"{"_id":"I1","name":""}"#),
                ("version", "3"),
            ],
        );

        let stats = unpacker(dir.path(), Format::Yaml).unpack(&store).unwrap();
        assert_eq!(stats.decode_failures, 1);
        assert_eq!(stats.skipped_malformed, 1);
        assert_eq!(stats.written, 1);
        assert!(dir.path().join("misc").join("!items!I1.yml").exists());
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "monsters",
            [(
                "!actors!A1",
                r#"{"_id":"A1","name":"Orc","system":{"z":1,"a":2},"flags":{"b":{},"a":[]}}"#,
            )],
        );
        let unpacker = unpacker(dir.path(), Format::Yaml);
        let path = dir.path().join("monsters").join("Orc_A1.yml");

        unpacker.unpack(&store).unwrap();
        let first = fs::read(&path).unwrap();
        unpacker.unpack(&store).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);

        let text = String::from_utf8(first).unwrap();
        assert!(text.find("a: 2").unwrap() < text.find("z: 1").unwrap());
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the pack's output directory should go.
        fs::write(dir.path().join("monsters"), b"").unwrap();

        let store = MemoryStore::with_entries(
            "monsters",
            [("!actors!A1", r#"{"_id":"A1","name":"Orc"}"#), ("!items!I1", r#"{"_id":"I1"}"#)],
        );

        let stats = unpacker(dir.path(), Format::Json).unpack(&store).unwrap();
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.write_failures, 2);
        assert_eq!(stats.written, 0);
    }

    #[test]
    fn test_progress_follows_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_entries(
            "pack",
            [
                ("!items!I2", r#"{"_id":"I2","name":"B"}"#),
                ("!items!I1", r#"{"_id":"I1","name":"A"}"#),
                ("!items.effects!I1.E1", r#"{"_id":"E1"}"#),
            ],
        );

        let mut seen = Vec::new();
        unpacker(dir.path(), Format::Json)
            .unpack_with_progress(&store, |stats| seen.push(stats.processed))
            .unwrap();
        assert_eq!(seen, [1, 2, 3]);
    }

    #[cfg(feature = "leveldb")]
    #[test]
    fn test_unpack_pack_directory() {
        use rusty_leveldb::{Options, DB};

        let dir = tempfile::tempdir().unwrap();
        let pack_path = dir.path().join("packs").join("monsters");
        fs::create_dir_all(&pack_path).unwrap();
        {
            let mut db = DB::open(&pack_path, Options::default()).unwrap();
            db.put(b"!actors!A1", br#"{"_id":"A1","name":"Orc","items":["I1"]}"#).unwrap();
            db.put(b"!actors.items!A1.I1", br#"{"_id":"I1","name":"Axe"}"#).unwrap();
            db.put(b"!folders!F1", br#"{"_id":"F1","name":"Monsters"}"#).unwrap();
            db.flush().unwrap();
        }

        let output = dir.path().join("out");
        let packs = crate::discover_packs(&dir.path().join("packs")).unwrap();
        assert_eq!(packs.len(), 1);

        let mut ticks = 0;
        let stats = unpacker(&output, Format::Json)
            .unpack_dir(&packs[0], |_| ticks += 1)
            .unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(stats.written, 2);
        assert_eq!(stats.skipped_secondary, 1);
        assert!(stats.is_complete());

        let actor = read_json(output.join("monsters").join("Orc_A1.json"));
        assert_eq!(actor["_key"], "!actors!A1");
        assert_eq!(actor["items"][0]["name"], "Axe");
        assert_eq!(actor["items"][0]["_key"], "!actors.items!A1.I1");
        assert!(output.join("monsters").join("Monsters_F1.json").exists());
    }

    #[cfg(feature = "leveldb")]
    #[test]
    fn test_unpack_missing_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let pack = PackDir {
            name: "empty".into(),
            path: dir.path().to_path_buf(),
        };

        let result = unpacker(&dir.path().join("out"), Format::Json).unpack_dir(&pack, |_| {});
        assert!(matches!(
            result,
            Err(crate::Error::Store(vttpack_store::Error::Open { .. }))
        ));
    }
}
