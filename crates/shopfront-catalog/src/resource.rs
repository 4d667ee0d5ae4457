//! # Resource Tri-State
//!
//! The state a view holds across an asynchronous catalog read.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Resource Lifecycle                                 │
//! │                                                                         │
//! │   view starts a fetch                                                   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │      Loading ──────── future resolves Ok ─────────► Data(T)             │
//! │          │                                                              │
//! │          └─────────── future resolves Err ────────► Error(message)      │
//! │                                                                         │
//! │   Error is terminal for this read; recovering means starting a fresh    │
//! │   fetch (a manual reload), which begins at Loading again.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::CatalogResult;

/// Tri-state wrapper for an asynchronous read: loading, failed, or loaded.
///
/// Serializes with a `status` tag so the frontend can switch on it:
/// `{"status":"loading"}`, `{"status":"error","value":"..."}`,
/// `{"status":"data","value":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Resource<T> {
    /// The fetch is in flight.
    Loading,

    /// The fetch failed; carries a display-ready message.
    Error(String),

    /// The fetch succeeded.
    Data(T),
}

impl<T> Resource<T> {
    /// Settles a finished catalog read into `Data` or `Error`.
    pub fn settle(result: CatalogResult<T>) -> Self {
        match result {
            Ok(data) => Resource::Data(data),
            Err(err) => Resource::Error(err.to_string()),
        }
    }

    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// Whether the fetch failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error(_))
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<CatalogResult<T>> for Resource<T> {
    fn from(result: CatalogResult<T>) -> Self {
        Resource::settle(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_settle_ok_is_data() {
        let resource = Resource::settle(Ok(5));
        assert_eq!(resource, Resource::Data(5));
        assert_eq!(resource.data(), Some(&5));
        assert!(!resource.is_loading());
        assert!(!resource.is_error());
    }

    #[test]
    fn test_settle_err_is_error_with_message() {
        let resource: Resource<i32> =
            Resource::settle(Err(CatalogError::Unavailable("timeout".to_string())));
        assert!(resource.is_error());
        assert_eq!(resource.error(), Some("Catalog unavailable: timeout"));
        assert_eq!(resource.data(), None);
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let loading: Resource<i32> = Resource::Loading;
        assert_eq!(
            serde_json::to_string(&loading).unwrap(),
            r#"{"status":"loading"}"#
        );

        let data = Resource::Data(7);
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"status":"data","value":7}"#
        );
    }
}
