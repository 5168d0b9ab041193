//! Unified error handling for the storefront.
//!
//! Remote-call failures are caught at the state-manager boundary and wrapped
//! in one of these variants; raw transport errors never reach a front-end.
//! Credential rejection is *not* an error - `authenticate` reports it as a
//! normal `false` outcome.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Bad user input, detected locally. The remote service is never called.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Checkout requires an authenticated session.
    #[error("authentication required")]
    AuthenticationRequired,

    /// The catalog could not be fetched at startup.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] CatalogError),

    /// A create/update was rejected by the remote service.
    #[error("remote write failed: {0}")]
    RemoteWrite(#[source] CatalogError),

    /// Durable state could not be read or written.
    #[error("state store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Validation("name and price are required".to_owned());
        assert_eq!(
            err.to_string(),
            "validation failed: name and price are required"
        );

        let err = StorefrontError::AuthenticationRequired;
        assert_eq!(err.to_string(), "authentication required");
    }

    #[test]
    fn test_store_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorefrontError::from(StoreError::Io(io));
        assert!(matches!(err, StorefrontError::Store(_)));
    }
}
