//! File-backed flag store

use super::traits::{FlagStore, OpenFlagStore, SessionResult};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Stores the value as the whole content of one text file
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers never see a partial value. Writers within this
/// process are serialized by an internal mutex; separate processes still race
/// and the last rename wins.
#[derive(Debug)]
pub struct FileFlagStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileFlagStore {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OpenFlagStore for FileFlagStore {
    fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }
}

impl FlagStore for FileFlagStore {
    fn load(&self) -> SessionResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, value: &str) -> SessionResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileFlagStore::open(dir.path().join("state.txt")).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_store_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.txt");
        let store = FileFlagStore::open(&path).unwrap();

        store.store("false").unwrap();
        store.store("true").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "true");
        assert_eq!(store.load().unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Outputs").join("rerun_state.txt");
        let store = FileFlagStore::open(&path).unwrap();
        store.store("false").unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileFlagStore::open(dir.path().join("state.txt")).unwrap();
        for i in 0..5 {
            store.store(if i % 2 == 0 { "true" } else { "false" }).unwrap();
        }
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
