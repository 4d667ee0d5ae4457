//! # Wire DTOs
//!
//! Payload types matching the catalog's JSON shape, and the conversion into
//! domain [`Product`] values.
//!
//! ## Why DTOs?
//! - Decouples the wire contract (camelCase, decimal prices) from the
//!   domain model (integer cents)
//! - Decoding is a pure function of the body text, so the whole boundary
//!   is testable without a network
//!
//! ## The Decimal Boundary
//! The catalog serves `"price": 549.99` and `"discountPercentage": 12.96`.
//! Both are converted to integer units (cents, basis points) exactly once,
//! here. Nothing downstream ever does float arithmetic on money.

use serde::Deserialize;

use shopfront_core::Product;

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Payloads
// =============================================================================

/// One product as served by the catalog.
///
/// Fields the storefront does not use (`total`, `skip`, pagination cursors)
/// are simply not declared; serde ignores unknown keys. Optional fields
/// default so a sparse catalog entry still decodes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPayload {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    discount_percentage: f64,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    images: Vec<String>,
}

/// Envelope of `GET /products`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListPayload {
    products: Vec<ProductPayload>,
}

// =============================================================================
// Conversions
// =============================================================================

/// Converts a decimal currency amount to integer cents.
///
/// Rounds at the half-cent; the wire format carries at most 2 decimals, so
/// this recovers the exact cent value (549.99 → 54999).
fn decimal_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Converts a decimal percentage (0..100) to basis points (0..10000).
fn percentage_to_bps(percentage: f64) -> u32 {
    (percentage.clamp(0.0, 100.0) * 100.0).round() as u32
}

impl From<ProductPayload> for Product {
    fn from(p: ProductPayload) -> Self {
        Product {
            id: p.id,
            title: p.title,
            description: p.description,
            price_cents: decimal_to_cents(p.price),
            discount_bps: percentage_to_bps(p.discount_percentage),
            rating: p.rating,
            stock: p.stock,
            brand: p.brand,
            category: p.category,
            thumbnail: p.thumbnail,
            images: p.images,
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes the body of `GET /products`.
pub(crate) fn decode_product_list(body: &str) -> CatalogResult<Vec<Product>> {
    let payload: ProductListPayload = serde_json::from_str(body)
        .map_err(|e| CatalogError::Unavailable(format!("unparsable product list: {e}")))?;

    Ok(payload.products.into_iter().map(Product::from).collect())
}

/// Decodes the body of `GET /products/{id}`.
pub(crate) fn decode_product(body: &str) -> CatalogResult<Product> {
    let payload: ProductPayload = serde_json::from_str(body)
        .map_err(|e| CatalogError::Unavailable(format!("unparsable product: {e}")))?;

    Ok(Product::from(payload))
}

// =============================================================================
// Unit Tests
// =============================================================================
