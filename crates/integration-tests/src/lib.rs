//! Integration tests for Clementine.
//!
//! These tests wire the full stack together - configuration, the HTTP
//! catalog client, the file store, and the state manager - against a mock
//! HTTP server standing in for the catalog API. No network and no real
//! server are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clementine-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use clementine_core::Email;
use clementine_storefront::catalog::HttpCatalogClient;
use clementine_storefront::storage::FileStore;
use clementine_storefront::{Storefront, StorefrontConfig};

/// Everything a test needs: a scripted catalog server and a storefront whose
/// durable state lives in a throwaway directory.
pub struct TestContext {
    pub server: mockito::ServerGuard,
    pub state_dir: TempDir,
}

impl TestContext {
    /// Start a mock catalog server and allocate a fresh state directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let state_dir = TempDir::new().expect("failed to create temp state dir");
        Self { server, state_dir }
    }

    /// Configuration pointing at the mock server and temp state dir.
    ///
    /// # Panics
    ///
    /// Panics if the mock server URL is not parseable.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            api_base_url: self.server.url().parse().expect("mock server url"),
            admin_email: Email::parse("admin@example.com").expect("admin email"),
            state_dir: self.state_dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        }
    }

    /// Build a storefront over the mock server and the shared state dir.
    ///
    /// Building a second storefront from the same context simulates a
    /// process restart: it sees whatever the first one persisted.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client or file store cannot be constructed.
    #[must_use]
    pub fn storefront(&self) -> Storefront {
        let config = self.config();
        let client = HttpCatalogClient::new(&config).expect("http client");
        let store = FileStore::new(config.state_dir.clone()).expect("file store");
        Storefront::new(Arc::new(client), Box::new(store), config.admin_email)
    }
}

/// JSON body for a catalog product, in the API's wire format.
#[must_use]
pub fn product_json(id: &str, name: &str, price: &str, stock: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "stock": stock,
        "shortDesc": format!("{name} (short)"),
        "description": format!("{name} (long)"),
    })
}
