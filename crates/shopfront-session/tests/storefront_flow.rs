//! End-to-end command flow over an in-memory catalog provider.
//!
//! Exercises the same sequence a shopper drives through the UI: load the
//! listing, search it, fill the cart, adjust quantities, and read the order
//! summary - without a network.

use async_trait::async_trait;

use shopfront_catalog::{CatalogError, CatalogProvider, CatalogResult};
use shopfront_core::{Product, ProductId};
use shopfront_session::commands::{
    add_to_cart, clear_cart, get_cart, load_product, load_products, remove_from_cart,
    search_products, update_cart_item,
};
use shopfront_session::{CartState, ErrorCode};

/// In-memory catalog used in place of the HTTP client.
struct FakeCatalog {
    products: Vec<Product>,
    /// When set, every read fails as if the remote catalog were down.
    outage: bool,
}

impl FakeCatalog {
    fn with_products(products: Vec<Product>) -> Self {
        FakeCatalog {
            products,
            outage: false,
        }
    }

    fn down() -> Self {
        FakeCatalog {
            products: Vec::new(),
            outage: true,
        }
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        if self.outage {
            return Err(CatalogError::Unavailable("connection refused".to_string()));
        }
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        if self.outage {
            return Err(CatalogError::Unavailable("connection refused".to_string()));
        }
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

fn demo_catalog() -> FakeCatalog {
    let mut phone = Product::new(1, "iPhone 9", 1000); // $10.00
    phone.category = "smartphones".to_string();

    let mut charger = Product::new(2, "USB-C Charger", 500); // $5.00
    charger.category = "accessories".to_string();

    FakeCatalog::with_products(vec![phone, charger])
}

#[tokio::test]
async fn browse_search_and_fill_cart() {
    let catalog = demo_catalog();
    let cart = CartState::new();

    // Listing resolves to data
    let listing = load_products(&catalog).await;
    let products = listing.data().expect("listing should load").clone();
    assert_eq!(products.len(), 2);

    // Search narrows the grid
    let hits = search_products(&products, "charger");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);

    // Two units of the phone, one charger
    add_to_cart(&catalog, &cart, 1).await.unwrap();
    add_to_cart(&catalog, &cart, 1).await.unwrap();
    let view = add_to_cart(&catalog, &cart, 2).await.unwrap();

    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.totals.item_count, 3);
    assert_eq!(view.totals.subtotal_cents, 2500); // 10×2 + 5×1
    assert_eq!(view.totals.tax_cents, 175); // 7%
    assert_eq!(view.totals.shipping_cents, 0); // free
    assert_eq!(view.totals.total_cents, 2675);

    // Stepping the charger below 1 changes nothing
    let view = update_cart_item(&cart, 2, 0);
    assert_eq!(view.items[1].quantity, 1);
    assert_eq!(view.totals.total_cents, 2675);

    // Removing the phone leaves only the charger
    let view = remove_from_cart(&cart, 1);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].product_id(), 2);
    assert_eq!(view.totals.item_count, 1);

    // Clear ends the session with an empty cart
    let view = clear_cart(&cart);
    assert!(view.items.is_empty());
    assert!(get_cart(&cart).items.is_empty());
}

#[tokio::test]
async fn add_unknown_product_maps_to_not_found() {
    let catalog = demo_catalog();
    let cart = CartState::new();

    let err = add_to_cart(&catalog, &cart, 999).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.message, "Product not found: 999");
    assert!(get_cart(&cart).items.is_empty()); // nothing was added
}

#[tokio::test]
async fn catalog_outage_surfaces_as_error_states() {
    let catalog = FakeCatalog::down();
    let cart = CartState::new();

    let listing = load_products(&catalog).await;
    assert!(listing.is_error());
    assert_eq!(
        listing.error(),
        Some("Catalog unavailable: connection refused")
    );

    let detail = load_product(&catalog, 1).await;
    assert!(detail.is_error());

    let err = add_to_cart(&catalog, &cart, 1).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogUnavailable);
}

#[tokio::test]
async fn cart_snapshot_survives_catalog_changes() {
    let mut catalog = demo_catalog();
    let cart = CartState::new();

    add_to_cart(&catalog, &cart, 1).await.unwrap();

    // The catalog reprices the phone between adds
    catalog.products[0].price_cents = 9999;
    let view = add_to_cart(&catalog, &cart, 1).await.unwrap();

    // Quantity bumped, snapshot price untouched
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.items[0].product.price_cents, 1000);
    assert_eq!(view.totals.subtotal_cents, 2000);
}
