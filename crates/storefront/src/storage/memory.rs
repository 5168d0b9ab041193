//! In-memory storage backend for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::StoreError;
use crate::storage::traits::{StateKey, StateStore};

/// In-memory storage backend for testing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<StateKey, String>>,
}

impl MemoryStore {
    /// Create a new in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records, for restart scenarios.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = (StateKey, String)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: StateKey) -> Result<Option<String>, StoreError> {
        let records = self.records.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(records.get(&key).cloned())
    }

    fn set(&self, key: StateKey, value: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        records.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: StateKey) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        records.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get(StateKey::Cart).unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let store = MemoryStore::new();
        store.set(StateKey::User, "value").unwrap();
        assert_eq!(store.get(StateKey::User).unwrap().unwrap(), "value");
    }

    #[test]
    fn remove_missing_key_succeeds() {
        let store = MemoryStore::new();
        store.remove(StateKey::Cart).unwrap();
    }

    #[test]
    fn with_records_seeds_state() {
        let store =
            MemoryStore::with_records([(StateKey::Cart, "{}".to_owned())]);
        assert_eq!(store.get(StateKey::Cart).unwrap().unwrap(), "{}");
        assert!(store.get(StateKey::User).unwrap().is_none());
    }
}
