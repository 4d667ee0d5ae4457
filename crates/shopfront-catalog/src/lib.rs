//! # shopfront-catalog: Remote Product Catalog Provider
//!
//! The only crate in the workspace that touches the network. It consumes the
//! public product API and hands the core clean, typed `Product` values.
//!
//! ## Read Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Read Path                                 │
//! │                                                                         │
//! │  load_products() ──► CatalogClient ──► GET {base_url}/products          │
//! │                           │                                             │
//! │                           ▼                                             │
//! │             ┌──────────────────────────────┐                            │
//! │             │  network error / timeout     │──► Unavailable             │
//! │             │  non-success HTTP status     │──► Unavailable             │
//! │             │  404 on /products/{id}       │──► NotFound(id)            │
//! │             │  body fails to decode        │──► Unavailable             │
//! │             │  2xx + well-formed body      │──► Vec<Product>            │
//! │             └──────────────────────────────┘                            │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  Resource<T>: the caller renders Loading until the future resolves,     │
//! │  then Data(..) or Error(..). No retry happens here - a failed read      │
//! │  surfaces directly and the view may offer a manual reload.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - `CatalogClient`, the reqwest-backed implementation
//! - [`provider`] - `CatalogProvider`, the async trait seam
//! - [`config`] - base URL / timeout configuration with env overrides
//! - [`error`] - `CatalogError` taxonomy
//! - [`resource`] - `Resource<T>` tri-state for in-flight fetches

pub mod client;
pub mod config;
mod dto;
pub mod error;
pub mod provider;
pub mod resource;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError};
pub use error::{CatalogError, CatalogResult};
pub use provider::CatalogProvider;
pub use resource::Resource;
