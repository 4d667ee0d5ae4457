//! # Catalog Client
//!
//! The reqwest-backed [`CatalogProvider`] implementation.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Catalog Read                                     │
//! │                                                                         │
//! │  list_products()                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base_url}/products ────── send failed ──────► Unavailable         │
//! │       │                         (refused, DNS,                          │
//! │       ▼                          timeout)                               │
//! │  status check ───────────────── non-success ──────► Unavailable         │
//! │       │                         (404 on /products/{id} → NotFound)      │
//! │       ▼                                                                 │
//! │  read body ──────────────────── read failed ──────► Unavailable         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  decode (dto.rs, pure) ──────── bad shape ────────► Unavailable         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> / Product                                                 │
//! │                                                                         │
//! │  No retry at this layer: the failure surfaces to the view, which may    │
//! │  offer a manual reload.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use shopfront_core::{Product, ProductId};

use crate::config::CatalogConfig;
use crate::dto::{decode_product, decode_product_list};
use crate::error::{CatalogError, CatalogResult};
use crate::provider::CatalogProvider;

/// HTTP client for the remote product catalog.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Builds a client from the given configuration.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(CatalogClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client against the default public catalog.
    pub fn from_default_config() -> CatalogResult<Self> {
        CatalogClient::new(CatalogConfig::default())
    }

    /// Performs a GET and returns the body text of a successful response.
    ///
    /// `not_found` maps an HTTP 404 for this request; the listing endpoint
    /// treats 404 like any other non-success status.
    async fn get_text(
        &self,
        url: &str,
        not_found: Option<CatalogError>,
    ) -> CatalogResult<String> {
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "catalog request failed");
            CatalogError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(err) = not_found {
                return Err(err);
            }
        }
        if !status.is_success() {
            warn!(url = %url, status = %status, "catalog returned non-success status");
            return Err(CatalogError::Unavailable(format!(
                "catalog returned HTTP {status}"
            )));
        }

        response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "failed to read catalog response body");
            CatalogError::Unavailable(e.to_string())
        })
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        debug!(url = %url, "fetching product list");

        let body = self.get_text(&url, None).await?;
        let products = decode_product_list(&body)?;

        debug!(count = products.len(), "product list fetched");
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!(url = %url, product_id = id, "fetching product");

        let body = self
            .get_text(&url, Some(CatalogError::NotFound(id)))
            .await?;
        decode_product(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = CatalogClient::new(CatalogConfig::new("https://dummyjson.com/")).unwrap();
        assert_eq!(client.base_url, "https://dummyjson.com");
    }

    #[test]
    fn test_default_config_builds() {
        assert!(CatalogClient::from_default_config().is_ok());
    }
}
