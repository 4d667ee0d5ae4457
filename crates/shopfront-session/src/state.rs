//! # Cart State
//!
//! The session's single cart instance behind a mutex.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Commands may be dispatched from an async context
//! 2. Only one command may modify the cart at a time
//! 3. Each operation runs to completion under one lock acquisition, so no
//!    command observes a half-applied predecessor
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them write. A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use shopfront_core::Cart;

/// The session-owned cart handle.
///
/// This is the "explicitly owned, single-writer state object" the command
/// layer passes around - there is no ambient global cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Product;

    #[test]
    fn test_starts_empty() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_mutation_is_visible_to_readers() {
        let state = CartState::new();
        let product = Product::new(1, "Test", 1000);

        state.with_cart_mut(|c| c.add_item(&product));

        assert_eq!(state.with_cart(|c| c.item_count()), 1);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = CartState::new();
        let alias = state.clone();

        state.with_cart_mut(|c| c.add_item(&Product::new(1, "Test", 1000)));

        assert_eq!(alias.with_cart(|c| c.item_count()), 1);
    }
}
