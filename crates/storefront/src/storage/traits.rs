//! Storage trait definitions.

use core::fmt;

use crate::storage::StoreError;

/// The two durable records the storefront keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Serialized session.
    User,
    /// Serialized cart.
    Cart,
}

impl StateKey {
    /// File name used by file-backed stores.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::User => "user.json",
            Self::Cart => "cart.json",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Cart => write!(f, "cart"),
        }
    }
}

/// Storage backend for serialized storefront state.
pub trait StateStore: Send + Sync {
    /// Get the record for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: StateKey) -> Result<Option<String>, StoreError>;

    /// Write the record for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn set(&self, key: StateKey, value: &str) -> Result<(), StoreError>;

    /// Remove the record for `key`. Removing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn remove(&self, key: StateKey) -> Result<(), StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn get(&self, key: StateKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: StateKey, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: StateKey) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
