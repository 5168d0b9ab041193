//! Durable storage for session and cart blobs.
//!
//! The state manager persists exactly two serialized records - the session
//! under [`StateKey::User`] and the cart under [`StateKey::Cart`] - and reads
//! them back on startup. Backends store opaque strings; serialization is the
//! caller's business.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{StateKey, StateStore};

use thiserror::Error;

/// Errors that can occur when reading or writing durable state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized before writing.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StoreError::Io(io);
        assert_eq!(err.to_string(), "io error: gone");
    }
}
