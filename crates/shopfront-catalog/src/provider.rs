//! # Catalog Provider Trait
//!
//! The seam between the command layer and whatever serves products.
//!
//! Production wires in [`crate::CatalogClient`]; tests substitute an
//! in-memory provider so command flows run without a network.

use async_trait::async_trait;

use shopfront_core::{Product, ProductId};

use crate::error::CatalogResult;

/// Read-only source of product data.
///
/// Both operations are asynchronous and may fail per the
/// [`crate::CatalogError`] taxonomy. Each call is independent: no caching,
/// no request coalescing, no retry. A caller that no longer cares about a
/// resolving read simply drops or ignores the future's output.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches the full product listing.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Fetches a single product by id.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;
}
