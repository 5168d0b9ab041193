//! Cart types.
//!
//! The cart maps product ids to lines carrying a product snapshot and a
//! quantity. Quantities are clamped against the snapshot's stock on every
//! update; a line clamped to zero is kept, not dropped, so the front-end can
//! show it as out of stock.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::ProductId;

use crate::models::product::Product;

/// One cart entry: a product snapshot plus the desired quantity.
///
/// Invariant: `quantity <= product.stock`, where `product` is the snapshot
/// captured at the time of the last update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at the time of the last add.
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart: product id to line, unique keys, unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: HashMap<ProductId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is increased and
    /// its snapshot refreshed to `product`; otherwise a new line is created.
    /// The combined quantity is clamped to the snapshot's stock. With stock 0
    /// the line is still created, at quantity 0.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let line = self
            .lines
            .entry(product.id.clone())
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity: 0,
            });
        line.quantity = line.quantity.saturating_add(quantity).min(product.stock);
        line.product = product.clone();
    }

    /// Remove the line for `id`. Returns whether a line was present; removing
    /// an absent line is a no-op, not an error.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        self.lines.remove(id).is_some()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Line for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Iterate over all lines.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (the navbar badge number).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.values().map(|l| l.quantity).sum()
    }

    /// Stock-clamped subtotal across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }
}
