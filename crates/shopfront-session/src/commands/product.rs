//! # Product Commands
//!
//! Commands for product listing, detail lookup and search.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  View mounts ──► renders Resource::Loading                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_products(&catalog).await                                          │
//! │       │                                                                 │
//! │       ├── Ok   ──► Resource::Data(products) ──► product grid            │
//! │       └── Err  ──► Resource::Error(msg) ─────► error panel + "Retry"    │
//! │                                                                         │
//! │  "Retry" simply calls load_products again; there is no automatic        │
//! │  retry or caching at this layer.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use shopfront_catalog::{CatalogProvider, Resource};
use shopfront_core::search::filter_products;
use shopfront_core::{Product, ProductId};

/// Loads the full product listing.
///
/// Resolves to `Resource::Data` or `Resource::Error`; the caller shows
/// `Resource::Loading` while the future is pending.
pub async fn load_products(catalog: &impl CatalogProvider) -> Resource<Vec<Product>> {
    debug!("load_products command");
    Resource::settle(catalog.list_products().await)
}

/// Loads a single product for the detail page.
///
/// An unknown id settles to `Resource::Error` with the not-found message,
/// which the detail view renders as its "product not found" state.
pub async fn load_product(catalog: &impl CatalogProvider, product_id: ProductId) -> Resource<Product> {
    debug!(product_id, "load_product command");
    Resource::settle(catalog.get_product(product_id).await)
}

/// Filters an already-loaded product list by the search query.
///
/// Pure and synchronous: search never refetches. Returns owned clones so
/// the frontend can hold the filtered list independently of the full one.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    debug!(query, "search_products command");
    filter_products(products, query)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_owned_matches() {
        let mut phone = Product::new(1, "iPhone 9", 54999);
        phone.category = "smartphones".to_string();
        let laptop = Product::new(2, "MacBook Pro", 174900);
        let products = vec![phone, laptop];

        let hits = search_products(&products, "macbook");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let products = vec![Product::new(1, "A", 100), Product::new(2, "B", 200)];
        assert_eq!(search_products(&products, "  ").len(), 2);
    }
}
