//! # Catalog Error Types
//!
//! Error types for catalog reads.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐   │
//! │  │   Unavailable    │  │     NotFound     │  │    InvalidConfig     │   │
//! │  │                  │  │                  │  │                      │   │
//! │  │  connect failed  │  │  404 on a single │  │  bad base URL or     │   │
//! │  │  timeout         │  │  product lookup  │  │  client build error  │   │
//! │  │  HTTP 5xx / 4xx  │  │                  │  │  (construction time, │   │
//! │  │  unparsable body │  │                  │  │   never on a read)   │   │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘   │
//! │                                                                         │
//! │  None of these is fatal: every failure is scoped to one read attempt.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopfront_core::ProductId;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering all read failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - All errors are `Send + Sync` for async compatibility
/// - Callers see exactly two read-time outcomes: the catalog was
///   unavailable, or (for single-product lookups) the id does not exist
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The remote catalog could not be read: network error, timeout,
    /// non-success HTTP status, or a response body that failed to decode.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// A single-product lookup missed (HTTP 404).
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The client could not be constructed from its configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Catalog unavailable: connection refused");

        let err = CatalogError::NotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
