//! # Commands Module
//!
//! The functions the frontend invokes. Each command declares exactly the
//! state it needs: cart commands take the [`crate::CartState`] handle,
//! product commands take a catalog provider, and `add_to_cart` takes both.

mod cart;
mod product;

pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item, CartView};
pub use product::{load_product, load_products, search_products};
