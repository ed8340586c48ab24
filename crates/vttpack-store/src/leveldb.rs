//! LevelDB-backed pack store.
//!
//! The engine replays its log and rotates its info log on open, so a pack
//! is never opened in place: its files are copied into a private snapshot
//! directory and the database is opened from there.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use rusty_leveldb::{LdbIterator, Options, DB};
use tempfile::TempDir;

use crate::store::{Entries, Entry, Store};
use crate::{Error, Result};

/// Engine bookkeeping files that are not part of the database contents.
const SKIPPED_FILES: &[&str] = &["LOCK", "LOG", "LOG.old"];

/// A pack directory opened as a LevelDB database.
///
/// The pack directory itself is only read. The handle and its snapshot
/// are released when the store is dropped.
pub struct LevelDbStore {
    /// Underlying database (the engine needs `&mut` even for reads)
    db: RefCell<DB>,
    /// Pack name, taken from the directory name
    name: String,
    /// Directory the pack was opened from
    path: PathBuf,
    /// Copy of the pack files; must outlive `db`
    snapshot: TempDir,
}

impl LevelDbStore {
    /// Open an existing pack directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |reason: String| Error::Open {
            path: path.to_path_buf(),
            reason,
        };

        let snapshot = copy_to_snapshot(path).map_err(|e| open_error(e.to_string()))?;

        let mut options = Options::default();
        options.create_if_missing = false;

        let db = DB::open(snapshot.path(), options).map_err(|e| open_error(e.to_string()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!(
            pack = %name,
            path = %path.display(),
            snapshot = %snapshot.path().display(),
            "opened store"
        );

        Ok(Self {
            db: RefCell::new(db),
            name,
            path: path.to_path_buf(),
            snapshot,
        })
    }

    /// Directory this store was opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the database handle and remove the snapshot.
    pub fn close(self) {
        let Self {
            db, name, snapshot, ..
        } = self;
        drop(db);

        if let Err(e) = snapshot.close() {
            tracing::warn!(pack = %name, error = %e, "cannot remove store snapshot");
        }
        tracing::debug!(pack = %name, "closed store");
    }
}

/// Copy the database files of `path` into a fresh temporary directory.
fn copy_to_snapshot(path: &Path) -> std::io::Result<TempDir> {
    let snapshot = tempfile::Builder::new().prefix("vttpack-").tempdir()?;

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        if SKIPPED_FILES.iter().any(|skipped| file_name == *skipped) {
            continue;
        }

        fs::copy(entry.path(), snapshot.path().join(&file_name))?;
    }

    Ok(snapshot)
}

impl Store for LevelDbStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let mut db = self.db.try_borrow_mut().map_err(|_| Error::Busy)?;
        Ok(db.get(key))
    }

    fn entries(&self) -> Result<Entries<'_>> {
        // The iterator keeps its own handle on the database state, so the
        // borrow only needs to last while it is created.
        let mut iter = self
            .db
            .try_borrow_mut()
            .map_err(|_| Error::Busy)?
            .new_iter()
            .map_err(|e| Error::Backend(e.to_string()))?;

        let mut key = Vec::new();
        let mut value = Vec::new();

        Ok(Box::new(std::iter::from_fn(move || {
            if !iter.advance() {
                return None;
            }

            if iter.current(&mut key, &mut value) {
                Some(Ok(Entry::new(key.clone(), value.clone())))
            } else {
                Some(Err(Error::Backend("iterator advanced to an invalid position".into())))
            }
        })))
    }
}
