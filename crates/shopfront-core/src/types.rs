//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  CartLineItem   │   │    TaxRate      │       │
//! │  │  ─────────────  │   │   (cart.rs)     │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  ─────────────  │   │  bps (u32)      │       │
//! │  │  title          │   │  product        │   │  700 = 7.00%    │       │
//! │  │  price_cents    │   │  (snapshot)     │   └─────────────────┘       │
//! │  │  discount_bps   │   │  quantity       │                             │
//! │  │  stock, rating  │   │  added_at       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Product is READ-ONLY here: it is owned by the remote catalog and       │
//! │  enters the core as an immutable value.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Identity
// =============================================================================

/// Product identifier assigned by the remote catalog.
///
/// The catalog issues small numeric ids; they are opaque to the core, which
/// only ever compares them for equality.
pub type ProductId = u64;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7.00% (the storefront's flat sales tax)
///
/// Integer basis points keep the tax calculation in pure integer math,
/// see [`Money::calculate_tax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the remote catalog.
///
/// ## Ownership
/// Products are owned by the catalog service; the core treats them as
/// immutable values. The cart copies a product into a line-item snapshot at
/// the moment of adding and never looks back at the catalog (see
/// [`crate::cart::CartLineItem`]).
///
/// ## Monetary fields
/// `price_cents` is the listed price in integer cents; the catalog's decimal
/// wire price is converted exactly once at the boundary. `discount_bps` is
/// the catalog's advertised discount percentage in basis points (1296 =
/// 12.96% off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the catalog.
    pub id: ProductId,

    /// Display title shown in the grid and on the detail page.
    pub title: String,

    /// Longer description for the detail page.
    pub description: String,

    /// Listed price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Advertised discount in basis points (0 = no discount).
    pub discount_bps: u32,

    /// Average customer rating, 0.0 to 5.0.
    pub rating: f64,

    /// Units in stock at the catalog.
    pub stock: i64,

    /// Brand name. Some catalog entries omit it.
    pub brand: Option<String>,

    /// Category slug (e.g. "smartphones").
    pub category: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Gallery image URLs.
    pub images: Vec<String>,
}

impl Product {
    /// Creates a minimal product with the given id, title and price.
    ///
    /// All remaining fields default to empty/zero. Intended for tests and
    /// doc examples; real products come decoded from the catalog.
    pub fn new(id: ProductId, title: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            title: title.into(),
            description: String::new(),
            price_cents,
            discount_bps: 0,
            rating: 0.0,
            stock: 0,
            brand: None,
            category: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    /// Returns the listed price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the catalog advertises a discount for this product.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_bps > 0
    }

    /// Returns the price after the advertised discount.
    ///
    /// The product grid and detail page show this figure next to the
    /// struck-through listed price. Cart math uses the listed price; the
    /// discount is presentation only.
    pub fn discounted_price(&self) -> Money {
        self.price().apply_percentage_discount(self.discount_bps)
    }

    /// Whether any units are in stock.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
