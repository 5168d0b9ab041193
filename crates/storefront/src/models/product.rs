//! Product types.
//!
//! Wire format uses camelCase field names (`shortDesc`), matching what the
//! catalog API serves and accepts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clementine_core::ProductId;

/// A purchasable product as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id, generated client-side at creation time.
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Units available. Decremented by checkout.
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub description: String,
}

/// Errors building a [`Product`] from a draft.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// The name field is empty.
    #[error("name and price are required: name is missing")]
    MissingName,
    /// No price was supplied.
    #[error("name and price are required: price is missing")]
    MissingPrice,
}

/// User-supplied fields of a product-creation form.
///
/// Name and price are mandatory; everything else defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub short_desc: String,
    pub description: String,
}

impl ProductDraft {
    /// Validate the draft and build a [`Product`] under the given id.
    ///
    /// Stock defaults to 0 when omitted.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] if the name is empty or the price is missing.
    pub fn build(self, id: ProductId) -> Result<Product, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let price = self.price.ok_or(DraftError::MissingPrice)?;

        Ok(Product {
            id,
            name: self.name,
            price,
            stock: self.stock.unwrap_or(0),
            short_desc: self.short_desc,
            description: self.description,
        })
    }
}
