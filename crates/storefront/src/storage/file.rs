//! File-based storage backend.

use std::fs;
use std::path::PathBuf;

use crate::storage::StoreError;
use crate::storage::traits::{StateKey, StateStore};

/// File-based storage backend with atomic writes.
///
/// Each key maps to one JSON file under the base directory. Writes go to a
/// temp file first, then rename into place, so a crash mid-write never leaves
/// a truncated record.
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path(&self, key: StateKey) -> PathBuf {
        self.base_dir.join(key.file_name())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: StateKey) -> Result<Option<String>, StoreError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: StateKey, value: &str) -> Result<(), StoreError> {
        let path = self.path(key);
        let temp = path.with_extension("tmp");

        // Write to temp file first
        fs::write(&temp, value)?;

        // Atomic rename - prevents corruption if process crashes mid-write
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn remove(&self, key: StateKey) -> Result<(), StoreError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("state")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let _store = FileStore::new(temp_dir.path().join("state")).unwrap();
        assert!(temp_dir.path().join("state").exists());
    }

    #[test]
    fn get_missing_key() {
        let (store, _temp) = create_test_store();
        assert!(store.get(StateKey::User).unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let (store, _temp) = create_test_store();
        store.set(StateKey::Cart, "{\"a\":1}").unwrap();

        let value = store.get(StateKey::Cart).unwrap().unwrap();
        assert_eq!(value, "{\"a\":1}");
    }

    #[test]
    fn set_overwrites() {
        let (store, _temp) = create_test_store();
        store.set(StateKey::User, "first").unwrap();
        store.set(StateKey::User, "second").unwrap();

        assert_eq!(store.get(StateKey::User).unwrap().unwrap(), "second");
    }

    #[test]
    fn keys_do_not_collide() {
        let (store, _temp) = create_test_store();
        store.set(StateKey::User, "session").unwrap();
        store.set(StateKey::Cart, "cart").unwrap();

        assert_eq!(store.get(StateKey::User).unwrap().unwrap(), "session");
        assert_eq!(store.get(StateKey::Cart).unwrap().unwrap(), "cart");
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let (store, temp_dir) = create_test_store();
        store.set(StateKey::User, "value").unwrap();

        let state_dir = temp_dir.path().join("state");
        assert!(!state_dir.join("user.tmp").exists());
        assert!(state_dir.join("user.json").exists());
    }

    #[test]
    fn remove_deletes_file() {
        let (store, temp_dir) = create_test_store();
        store.set(StateKey::Cart, "value").unwrap();

        store.remove(StateKey::Cart).unwrap();
        assert!(!temp_dir.path().join("state").join("cart.json").exists());
        assert!(store.get(StateKey::Cart).unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_succeeds() {
        let (store, _temp) = create_test_store();
        store.remove(StateKey::User).unwrap();
    }

    #[test]
    fn values_survive_reopening() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("state");

        {
            let store = FileStore::new(base.clone()).unwrap();
            store.set(StateKey::Cart, "persisted").unwrap();
        }

        let reopened = FileStore::new(base).unwrap();
        assert_eq!(reopened.get(StateKey::Cart).unwrap().unwrap(), "persisted");
    }
}
