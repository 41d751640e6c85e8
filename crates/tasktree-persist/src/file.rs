//! File-per-key backend
//!
//! Stores each key as `<root>/<key>.json` so the collections survive
//! process restarts. Keys are restricted to ASCII alphanumerics, `-` and
//! `_`, which keeps a key from ever naming a path outside the root.

use crate::backend::StorageBackend;
use crate::error::{PersistenceError, PersistenceResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Backend that stores each key as a UTF-8 file under a root directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`, creating the directory if needed
    pub fn new(root: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|source| PersistenceError::io(root.display().to_string(), source))?;
        Ok(Self { root })
    }

    /// Root directory the backend writes into
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        if key.is_empty() || !key.chars().all(valid_key_char) {
            return Err(PersistenceError::invalid_key(key));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn valid_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        fs::read_to_string(path).ok()
    }

    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|source| PersistenceError::io(key, source))
    }

    fn remove(&mut self, key: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::io(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path()).unwrap();
        backend.set("allTasks", "[{\"text\":\"milk\"}]".to_string()).unwrap();
        assert_eq!(
            backend.get("allTasks"),
            Some("[{\"text\":\"milk\"}]".to_string())
        );
    }

    #[test]
    fn value_survives_backend_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut backend = FileBackend::new(dir.path()).unwrap();
            backend.set("allTasks", "[1,2,3]".to_string()).unwrap();
        }
        let reopened = FileBackend::new(dir.path()).unwrap();
        assert_eq!(reopened.get("allTasks"), Some("[1,2,3]".to_string()));
    }

    #[test]
    fn get_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        assert_eq!(backend.get("absent"), None);
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path()).unwrap();
        backend.remove("absent").unwrap();
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path()).unwrap();
        backend.set("k", "v".to_string()).unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k"), None);
    }

    #[test]
    fn rejects_path_traversal_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path()).unwrap();
        let err = backend.set("../escape", "x".to_string()).unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidKey { .. }));
        assert_eq!(backend.get("../escape"), None);
    }

    #[test]
    fn rejects_empty_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path()).unwrap();
        let err = backend.set("", "x".to_string()).unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidKey { .. }));
    }
}
