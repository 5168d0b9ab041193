//! The storefront state manager.
//!
//! [`Storefront`] owns the live session, cart, and product list. Every
//! mutation funnels through it: it calls the catalog API, writes session and
//! cart through to durable storage on each change, and hands front-ends a
//! read-only [`StateSnapshot`]. Front-ends hold no authoritative state.
//!
//! Operations are async (they suspend for the network round trip) but take
//! `&mut self`, so a single client instance can never interleave two
//! mutations.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use clementine_core::{AccessLevel, Email, ProductId};

use crate::catalog::{CatalogApi, CatalogError};
use crate::error::{Result, StorefrontError};
use crate::models::{Cart, Product, ProductDraft, Session};
use crate::storage::{StateKey, StateStore};

/// Read-only view of the storefront state handed to front-ends.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot<'a> {
    pub session: Option<&'a Session>,
    pub cart: &'a Cart,
    pub products: &'a [Product],
}

/// Result of a checkout: which stock updates the server confirmed.
///
/// Checkout is best-effort - each product update is an independent remote
/// call, and the cart is cleared regardless of the outcomes.
#[derive(Debug, Default)]
pub struct CheckoutOutcome {
    /// Server-confirmed product records, stock already decremented.
    pub updated: Vec<Product>,
    /// Products whose stock update the server did not confirm.
    pub failed: Vec<CheckoutFailure>,
}

impl CheckoutOutcome {
    /// Whether every stock update went through.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A single failed stock update during checkout.
#[derive(Debug)]
pub struct CheckoutFailure {
    pub product_id: ProductId,
    pub error: CatalogError,
}

/// The session/cart state manager.
pub struct Storefront {
    catalog: Arc<dyn CatalogApi>,
    store: Box<dyn StateStore>,
    admin_email: Email,
    session: Option<Session>,
    cart: Cart,
    products: Vec<Product>,
}

impl Storefront {
    /// Create a state manager with empty in-memory state.
    ///
    /// Call [`initialize`](Self::initialize) to restore durable state and
    /// fetch the catalog before serving a front-end.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogApi>, store: Box<dyn StateStore>, admin_email: Email) -> Self {
        Self {
            catalog,
            store,
            admin_email,
            session: None,
            cart: Cart::new(),
            products: Vec::new(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Read-only snapshot of session, cart, and catalog.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            session: self.session.as_ref(),
            cart: &self.cart,
            products: &self.products,
        }
    }

    /// The current session, if authenticated.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The product catalog, in server order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The catalog product with the given id, if any.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Restore session and cart from durable storage and fetch the catalog.
    ///
    /// Missing or corrupt durable records are not fatal: they fall back to
    /// anonymous/empty, logged at warn.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::CatalogUnavailable`] if the catalog fetch
    /// fails. Session and cart are already restored at that point.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> Result<()> {
        self.session = self.load(StateKey::User);
        self.cart = self.load(StateKey::Cart).unwrap_or_default();

        self.products = self
            .catalog
            .list_products()
            .await
            .map_err(StorefrontError::CatalogUnavailable)?;

        debug!(
            products = self.products.len(),
            cart_lines = self.cart.line_count(),
            authenticated = self.session.is_some(),
            "storefront initialized"
        );
        Ok(())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Check credentials against the catalog API and open a session.
    ///
    /// Returns `Ok(true)` and stores the session (memory and durable) on
    /// success. Credential rejection and transport failures are a normal
    /// `Ok(false)` outcome - no partial session is ever stored. Only a
    /// malformed email (local validation) or a durable-store write failure
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] for a malformed email and
    /// [`StorefrontError::Store`] if the session cannot be persisted.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn authenticate(&mut self, email: &str, password: &SecretString) -> Result<bool> {
        let email = Email::parse(email)
            .map_err(|e| StorefrontError::Validation(e.to_string()))?;

        let token = match self.catalog.login(&email, password).await {
            Ok(token) => token,
            Err(CatalogError::Unauthorized) => {
                debug!("credentials rejected");
                return Ok(false);
            }
            Err(error) => {
                warn!(%error, "login request failed");
                return Ok(false);
            }
        };

        let access_level = AccessLevel::for_identity(&email, &self.admin_email);
        let session = Session {
            email,
            token,
            access_level,
        };

        // Persist before exposing, so a store failure leaves us anonymous
        self.persist(StateKey::User, &session)?;
        self.session = Some(session);
        Ok(true)
    }

    /// Close the session and remove its durable record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Store`] if the durable record cannot be
    /// removed.
    pub fn logout(&mut self) -> Result<()> {
        self.session = None;
        self.store.remove(StateKey::User)?;
        Ok(())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Create a product from a draft.
    ///
    /// Validation failures never reach the remote service. On success the
    /// server-confirmed record is appended to the in-memory catalog - there
    /// is no optimistic insert, so the list never shows unpersisted products.
    /// Access gating (only admins see the form) is the front-end's concern.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] if name or price is missing
    /// and [`StorefrontError::RemoteWrite`] if the server rejects the create.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        let product = draft
            .build(ProductId::generate())
            .map_err(|e| StorefrontError::Validation(e.to_string()))?;

        let created = self
            .catalog
            .create_product(&product)
            .await
            .map_err(StorefrontError::RemoteWrite)?;

        self.products.push(created.clone());
        Ok(created)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` of `product` to the cart and persist it.
    ///
    /// Merging and stock clamping follow [`Cart::add`]. The write-through
    /// persist means a restart can never observe a cart the durable store
    /// doesn't.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Store`] if the cart cannot be persisted.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<()> {
        self.cart.add(product, quantity);
        self.persist(StateKey::Cart, &self.cart)
    }

    /// Remove the line for `id`, if present, and persist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Store`] if the cart cannot be persisted.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<()> {
        self.cart.remove(id);
        self.persist(StateKey::Cart, &self.cart)
    }

    /// Empty the cart and remove its durable record.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Store`] if the durable record cannot be
    /// removed.
    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear();
        self.store.remove(StateKey::Cart)?;
        Ok(())
    }

    /// Commit the cart: decrement stock for every line and push each changed
    /// product to the server.
    ///
    /// Best-effort semantics: every product update is an independent remote
    /// call. Confirmed updates replace the in-memory product with the
    /// server's record; unconfirmed ones leave it untouched and are reported
    /// in the outcome. The cart is cleared either way. An empty cart issues
    /// no remote calls.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::AuthenticationRequired`] when anonymous
    /// (no mutation happens) and [`StorefrontError::Store`] if the cart
    /// record cannot be removed afterwards.
    #[instrument(skip(self))]
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome> {
        if self.session.is_none() {
            return Err(StorefrontError::AuthenticationRequired);
        }

        let mut outcome = CheckoutOutcome::default();
        for product in &mut self.products {
            let Some(line) = self.cart.get(&product.id) else {
                continue;
            };

            let mut changed = product.clone();
            changed.stock = changed.stock.saturating_sub(line.quantity);

            match self.catalog.update_product(&changed).await {
                Ok(confirmed) => {
                    *product = confirmed.clone();
                    outcome.updated.push(confirmed);
                }
                Err(error) => {
                    warn!(product_id = %product.id, %error, "stock update not confirmed");
                    outcome.failed.push(CheckoutFailure {
                        product_id: product.id.clone(),
                        error,
                    });
                }
            }
        }

        for line in self.cart.lines() {
            if self.product(&line.product.id).is_none() {
                warn!(product_id = %line.product.id, "cart line no longer in catalog, dropping");
            }
        }

        self.cart.clear();
        self.store.remove(StateKey::Cart)?;
        Ok(outcome)
    }

    // =========================================================================
    // Persistence helpers
    // =========================================================================

    fn persist<T: serde::Serialize>(&self, key: StateKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(crate::storage::StoreError::Serialize)?;
        self.store.set(key, &raw)?;
        Ok(())
    }

    fn load<T: serde::de::DeserializeOwned>(&self, key: StateKey) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(error) => {
                    warn!(%key, %error, "discarding corrupt durable record");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%key, %error, "failed to read durable record, using default");
                None
            }
        }
    }
}
