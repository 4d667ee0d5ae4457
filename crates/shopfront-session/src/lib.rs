//! # Shopfront Session Library
//!
//! The command layer for a single shopper session. A frontend holds one
//! [`CartState`] and one catalog provider, and drives both exclusively
//! through the functions in [`commands`].
//!
//! ## Module Organization
//! ```text
//! shopfront_session/
//! ├── lib.rs          ◄─── You are here (exports & wiring)
//! ├── state.rs        ◄─── Cart state handle (single writer)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product listing/detail/search commands
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── error.rs        ◄─── API error envelope for the frontend
//! └── telemetry.rs    ◄─── Tracing initialization
//! ```
//!
//! ## Concurrency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Single Active Caller                                 │
//! │                                                                         │
//! │  One UI event thread issues commands. Cart operations run to            │
//! │  completion under one mutex acquisition each, so no command ever        │
//! │  observes a partially applied prior command.                            │
//! │                                                                         │
//! │  The only suspending operations are the catalog reads. They are         │
//! │  independent and uncached; a fetch superseded by navigation may         │
//! │  resolve late and simply be discarded by the caller.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use shopfront_catalog::CatalogClient;
//! use shopfront_session::commands::{add_to_cart, get_cart};
//! use shopfront_session::state::CartState;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! shopfront_session::telemetry::init_tracing();
//!
//! let catalog = CatalogClient::from_default_config()?;
//! let cart = CartState::new();
//!
//! let view = add_to_cart(&catalog, &cart, 1).await?;
//! assert_eq!(view.totals.item_count, 1);
//!
//! let view = get_cart(&cart);
//! assert_eq!(view.items.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod telemetry;

pub use commands::{
    add_to_cart, clear_cart, get_cart, load_product, load_products, remove_from_cart,
    search_products, update_cart_item, CartView,
};
pub use error::{ApiError, ErrorCode};
pub use state::CartState;
