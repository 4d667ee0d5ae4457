//! # Cart Module
//!
//! The cart store: an ordered list of line items and the four total
//! transformations that maintain it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                 Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_item() ──────────► qty += 1 or push     │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► items[i].qty = n     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► items.retain(..)     │
//! │                                                                         │
//! │  Click Clear ────────────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Render totals ──────────► subtotal()/tax()/... ► (read only)          │
//! │                                                                         │
//! │  NOTE: every operation is TOTAL - it cannot fail. Inputs that would     │
//! │        break an invariant (unknown id, quantity < 1) are no-ops.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per product id, at all times.
//! - Every stored quantity is >= 1; a quantity below 1 is never stored.
//! - Item order is insertion order of first add; re-adding does not move
//!   an item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId, TaxRate};
use crate::{SHIPPING_CENTS, TAX_RATE_BPS};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One cart entry, uniquely identified by product id.
///
/// ## Price Freezing
/// The line item carries a full snapshot of the product taken at the moment
/// of first add. If the catalog later changes the price (or anything else),
/// the cart keeps displaying and charging the snapshot. Re-adding the same
/// id only bumps the quantity - the snapshot is NOT refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product snapshot frozen at first add.
    pub product: Product,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a line item from a product with quantity 1.
    fn from_product(product: &Product) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// The product id this line represents.
    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Calculates the line total (snapshot unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Created empty at session start, mutated only through the four operations
/// below, and never persisted - it lives exactly as long as the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items in insertion order of first add.
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by exactly 1. The stored
    ///   snapshot is kept as-is, even if the passed `product` differs from it.
    /// - Product not in cart: appended at the end with quantity 1.
    ///
    /// There are no error conditions.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartLineItem::from_product(product));
    }

    /// Removes the line item with the given product id.
    ///
    /// Removing an id that is not in the cart is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Replaces the quantity of the line item with the given product id.
    ///
    /// ## Behavior
    /// - `quantity < 1`: no-op. Callers are expected to guard the lower
    ///   bound (the quantity stepper stops at 1); a sub-1 value reaching
    ///   this far is ignored rather than treated as a removal.
    /// - Unknown id: no-op.
    /// - Otherwise the quantity becomes exactly `quantity` (not added to
    ///   the prior value).
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // =========================================================================
    // Derived Queries
    // =========================================================================
    // All recomputed on every read. Nothing here is cached: the cart is
    // small and the arithmetic is integer addition.

    /// The line items, in insertion order of first add.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all line items (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items (the "(N items)" heading on the cart
    /// page counts lines, not units).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Calculates the subtotal (sum of line totals, before tax).
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.line_total())
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Calculates the tax: a flat 7% of the subtotal.
    ///
    /// Tax applies to the subtotal as a whole, not per line, so the cent
    /// rounding happens once.
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(TaxRate::from_bps(TAX_RATE_BPS))
    }

    /// Shipping cost. Always free.
    pub fn shipping(&self) -> Money {
        Money::from_cents(SHIPPING_CENTS)
    }

    /// Calculates the grand total (subtotal + tax + shipping).
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax() + self.shipping()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the order-summary panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: i64,
    pub line_count: usize,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            subtotal_cents: cart.subtotal().cents(),
            tax_cents: cart.tax().cents(),
            shipping_cents: cart.shipping().cents(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
