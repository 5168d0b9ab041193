//! CLI command implementations.
//!
//! Every command boots a [`Storefront`] over the file store and the HTTP
//! catalog client, runs one operation, and lets write-through persistence
//! carry the state to the next invocation.

pub mod cart;
pub mod catalog;
pub mod session;

use std::sync::Arc;

use thiserror::Error;

use clementine_storefront::catalog::{CatalogError, HttpCatalogClient};
use clementine_storefront::config::ConfigError;
use clementine_storefront::storage::{FileStore, StoreError};
use clementine_storefront::{Storefront, StorefrontConfig, StorefrontError};

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A storefront operation failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// The HTTP client could not be built.
    #[error("catalog client error: {0}")]
    Catalog(#[from] CatalogError),

    /// Durable state directory problems.
    #[error("state store error: {0}")]
    Store(#[from] StoreError),

    /// The command cannot proceed as invoked.
    #[error("{0}")]
    Usage(String),
}

/// Build and initialize a storefront from the environment.
///
/// A catalog fetch failure is not fatal here: the storefront comes up with an
/// empty product list so session/cart commands still work offline.
pub(crate) async fn boot() -> Result<Storefront, CliError> {
    let config = StorefrontConfig::from_env()?;
    let client = HttpCatalogClient::new(&config)?;
    let store = FileStore::new(config.state_dir.clone())?;

    let mut front = Storefront::new(Arc::new(client), Box::new(store), config.admin_email);

    match front.initialize().await {
        Ok(()) => {}
        Err(StorefrontError::CatalogUnavailable(error)) => {
            tracing::warn!(%error, "catalog unavailable, product list will be empty");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(front)
}
