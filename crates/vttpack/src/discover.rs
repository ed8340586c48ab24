//! Pack directory discovery.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// A candidate pack directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDir {
    /// Directory name, used as the pack name and output subdirectory
    pub name: String,
    /// Full path to the directory
    pub path: PathBuf,
}

/// List the pack directories directly under `root`, sorted by name.
///
/// Entries that are not directories are logged and skipped. Fails if
/// `root` itself is missing, unreadable or not a directory.
pub fn discover_packs(root: &Path) -> Result<Vec<PackDir>> {
    let directory_error = |reason: String| Error::Directory {
        path: root.to_path_buf(),
        reason,
    };

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(directory_error("not a directory".into())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(directory_error("no such directory".into()))
        }
        Err(e) => return Err(directory_error(e.to_string())),
    }

    let mut packs = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| directory_error(e.to_string()))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !entry.file_type().is_dir() {
            tracing::warn!(entry = %name, "not a directory, skipping");
            continue;
        }

        packs.push(PackDir {
            name,
            path: entry.into_path(),
        });
    }

    Ok(packs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_directories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("monsters")).unwrap();
        fs::create_dir(dir.path().join("items")).unwrap();
        fs::write(dir.path().join("README.md"), b"not a pack").unwrap();

        let packs = discover_packs(dir.path()).unwrap();
        let names: Vec<_> = packs.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["items", "monsters"]);
        assert_eq!(packs[0].path, dir.path().join("items"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("packs");

        match discover_packs(&missing) {
            Err(Error::Directory { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_file_instead_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("packs");
        fs::write(&file, b"").unwrap();

        assert!(matches!(
            discover_packs(&file),
            Err(Error::Directory { reason, .. }) if reason == "not a directory"
        ));
    }
}
