//! Remote catalog API client.
//!
//! # Architecture
//!
//! - The API is REST-ish JSON over HTTP; `reqwest` does the transport
//! - [`CatalogApi`] is the seam the state manager consumes, so tests can
//!   substitute a fake without a network
//! - Every call is bounded by the configured client timeout; there is no
//!   retry and no caching - the catalog is replaced wholesale on fetch
//!
//! # Endpoints
//!
//! - `GET  /products` - full catalog, server order
//! - `POST /products` - create (id generated client-side)
//! - `PUT  /products/{id}` - full-record update
//! - `POST /login` - credential check, returns an access token

mod http;

pub use http::HttpCatalogClient;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use clementine_core::Email;

use crate::models::Product;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed (connection refused, timeout, ...).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an unexpected status.
    #[error("unexpected status {status} from {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The login endpoint rejected the credentials.
    #[error("invalid credentials")]
    Unauthorized,

    /// The response body was not the JSON we expected.
    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operations the storefront needs from the remote catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product catalog, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Create a product. Returns the server-confirmed record.
    async fn create_product(&self, product: &Product) -> Result<Product, CatalogError>;

    /// Replace the product record with the given id. Returns the
    /// server-confirmed record.
    async fn update_product(&self, product: &Product) -> Result<Product, CatalogError>;

    /// Check credentials. Returns the access token on success and
    /// [`CatalogError::Unauthorized`] on rejection.
    async fn login(&self, email: &Email, password: &SecretString) -> Result<String, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Unauthorized;
        assert_eq!(err.to_string(), "invalid credentials");

        let err = CatalogError::Status {
            endpoint: "/products".to_owned(),
            status: 502,
            body: "bad gateway".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 502 from /products: bad gateway"
        );
    }
}
