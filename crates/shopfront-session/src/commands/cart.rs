//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                         │
//! │  │  Cart    │     │          │     │ Summary  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────► (back to empty)        │
//! │                                                                         │
//! │  Every command returns the refreshed CartView so the frontend can       │
//! │  re-render items and totals from one payload.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use shopfront_catalog::CatalogProvider;
use shopfront_core::{Cart, CartLineItem, CartTotals, ProductId};

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Cart page / header badge                                           │
/// │                                                                     │
/// │  ┌──────────────────────────────────────────────────────────────┐   │
/// │  │  Shopping Cart (2 items)                                     │   │
/// │  ├──────────────────────────────────────────────────────────────┤   │
/// │  │  iPhone 9              x2              $1,099.98             │   │
/// │  │  perfume Oil           x1                 $13.00             │   │
/// │  ├──────────────────────────────────────────────────────────────┤   │
/// │  │  Subtotal                              $1,112.98             │   │
/// │  │  Shipping                                   Free             │   │
/// │  │  Tax (7%)                                 $77.91             │   │
/// │  │  ──────────────────────────────────────────────              │   │
/// │  │  TOTAL                                 $1,190.89             │   │
/// │  └──────────────────────────────────────────────────────────────┘   │
/// │                                                                     │
/// │  get_cart(&cart) → CartView { items: [...], totals: {...} }         │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartView {
    debug!("get_cart command");
    cart.with_cart(|c| CartView::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Fetches the product from the catalog, then snapshots it into the cart
/// - If the product is already in the cart: quantity increases by 1 and the
///   existing snapshot is kept (the price stays frozen at first add)
/// - If not: added as a new line with quantity 1
///
/// ## Errors
/// Only the catalog read can fail - `NOT_FOUND` for an unknown id,
/// `CATALOG_UNAVAILABLE` when the fetch does not succeed. The cart
/// mutation itself cannot fail.
pub async fn add_to_cart(
    catalog: &impl CatalogProvider,
    cart: &CartState,
    product_id: ProductId,
) -> Result<CartView, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = catalog.get_product(product_id).await?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(&product);
        CartView::from(&*c)
    }))
}

/// Replaces the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity below 1: no-op (the quantity stepper in the UI stops at 1;
///   a lower value reaching this command is ignored, not treated as remove)
/// - Unknown product id: no-op
///
/// Always returns the (possibly unchanged) cart view.
pub fn update_cart_item(cart: &CartState, product_id: ProductId, quantity: i64) -> CartView {
    debug!(product_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartView::from(&*c)
    })
}

/// Removes an item from the cart.
///
/// Removing an id that is not in the cart is a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartView {
    debug!(product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartView::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - The "Clear Cart" action on the cart page
/// - After an order is placed (new session)
pub fn clear_cart(cart: &CartState) -> CartView {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartView::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Product;

    fn seeded_cart() -> CartState {
        let state = CartState::new();
        state.with_cart_mut(|c| {
            c.add_item(&Product::new(1, "iPhone 9", 54999));
            c.add_item(&Product::new(1, "iPhone 9", 54999));
            c.add_item(&Product::new(11, "perfume Oil", 1300));
        });
        state
    }

    #[test]
    fn test_get_cart_reflects_items_and_totals() {
        let cart = seeded_cart();
        let view = get_cart(&cart);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.totals.item_count, 3);
        assert_eq!(view.totals.subtotal_cents, 54999 * 2 + 1300);
    }

    #[test]
    fn test_update_cart_item_replaces_quantity() {
        let cart = seeded_cart();
        let view = update_cart_item(&cart, 11, 4);

        assert_eq!(view.items[1].quantity, 4);
        assert_eq!(view.totals.item_count, 6);
    }

    #[test]
    fn test_update_below_one_returns_unchanged_view() {
        let cart = seeded_cart();
        let before = get_cart(&cart);

        let after = update_cart_item(&cart, 11, 0);

        assert_eq!(after.items[1].quantity, 1);
        assert_eq!(after.totals.total_cents, before.totals.total_cents);
    }

    #[test]
    fn test_remove_and_clear() {
        let cart = seeded_cart();

        let view = remove_from_cart(&cart, 1);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].product_id(), 11);

        let view = clear_cart(&cart);
        assert!(view.items.is_empty());
        assert_eq!(view.totals.total_cents, 0);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let cart = seeded_cart();
        let json = serde_json::to_value(get_cart(&cart)).unwrap();

        assert!(json["totals"]["subtotalCents"].is_number());
        assert!(json["items"][0]["product"]["priceCents"].is_number());
    }
}
