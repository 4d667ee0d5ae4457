//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (View Layer)                        │   │
//! │  │    Product Grid ──► Search Bar ──► Cart Page ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopfront-session (commands)                   │   │
//! │  │    load_products, add_to_cart, update_cart_item, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  search   │   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  filter   │   │   │
//! │  │   │  TaxRate  │  │  TaxCalc  │  │ LineItem  │  │  matches  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shopfront-catalog (Catalog Provider)               │   │
//! │  │          Remote product API client, wire decoding               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart store: line items, transformations, totals
//! - [`search`] - Product search filtering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart transformations never fail - invalid input is a no-op
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::cart::Cart;
//! use shopfront_core::types::Product;
//!
//! let mut cart = Cart::new();
//! let product = Product::new(1, "Mechanical Keyboard", 10999); // $109.99
//!
//! cart.add_item(&product);
//! cart.add_item(&product); // same id: quantity becomes 2
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal().cents(), 21998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod money;
pub mod search;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use cart::{Cart, CartLineItem, CartTotals};
pub use money::Money;
pub use types::{Product, ProductId, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax rate in basis points (700 = 7.00%).
///
/// ## Why a constant?
/// The storefront charges a flat 7% on the cart subtotal. The rate is a
/// business constant, not derived from jurisdiction, so it lives here as a
/// named value instead of configuration.
pub const TAX_RATE_BPS: u32 = 700;

/// Shipping cost in cents.
///
/// ## Why a constant?
/// Shipping is always free. The order summary still renders a shipping row,
/// so the zero is named rather than implied by omission.
pub const SHIPPING_CENTS: i64 = 0;
