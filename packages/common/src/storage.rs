use crate::error::StorageError;
use crate::result::StorageResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Durable key/value storage for editor state
///
/// Keys are short identifiers (e.g. `landing-page-state`); values are
/// serialized records.
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// File-backed storage: one `<key>.json` file per key inside a directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory storage for testing
pub struct MemoryStorage {
    pub entries: HashMap<String, String>,
    /// When set, every operation fails (simulates an unavailable backend)
    pub fail: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fail: false,
        }
    }

    /// Storage whose every read and write fails
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail: true,
        }
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail {
            Err(StorageError::from("storage unavailable"))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("state").unwrap(), None);

        storage.write("state", "{}").unwrap();
        assert_eq!(storage.read("state").unwrap(), Some("{}".to_string()));

        storage.remove("state").unwrap();
        assert_eq!(storage.read("state").unwrap(), None);
    }

    #[test]
    fn test_failing_storage() {
        let mut storage = MemoryStorage::failing();
        assert!(storage.read("state").is_err());
        assert!(storage.write("state", "{}").is_err());
    }

    #[test]
    fn test_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("landing-page-state").unwrap(), None);
        storage.write("landing-page-state", "{\"a\":1}").unwrap();
        assert!(dir.path().join("nested/landing-page-state.json").exists());
        assert_eq!(
            storage.read("landing-page-state").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        storage.remove("landing-page-state").unwrap();
        storage.remove("landing-page-state").unwrap();
        assert_eq!(storage.read("landing-page-state").unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(matches!(
            storage.read("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
