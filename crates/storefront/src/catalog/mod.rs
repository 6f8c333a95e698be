//! Remote catalog API client.
//!
//! # Architecture
//!
//! - The catalog is source of truth - no local sync, direct API calls
//! - [`CatalogApi`] is the seam the controller depends on; tests substitute
//!   a stub, production uses [`HttpCatalogClient`] over `reqwest`
//! - No retries: a failed call surfaces immediately and the caller degrades
//!   the affected view
//!
//! # Example
//!
//! ```rust,ignore
//! use swiftcart_storefront::catalog::{CatalogApi, HttpCatalogClient};
//!
//! let client = HttpCatalogClient::new(&config.api_url);
//! let categories = client.list_categories().await?;
//! let electronics = client.list_products(Some("electronics"), None).await?;
//! let product = client.get_product(ProductId::new(1)).await?;
//! ```

mod client;

pub use client::HttpCatalogClient;

use async_trait::async_trait;
use swiftcart_core::types::{Product, ProductId};
use thiserror::Error;

/// Errors that can occur when interacting with the catalog API.
///
/// `Http`, `Status`, and `Parse` are fetch failures (transport error,
/// non-2xx response, malformed JSON body); `NotFound` is a well-formed
/// response carrying no matching product.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid response, but no matching product.
    #[error("Product {0} not found")]
    NotFound(ProductId),
}

/// Read operations against the product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List all category labels, in API order.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// List products, optionally scoped to a category and/or limited in
    /// count.
    async fn list_products(
        &self,
        category: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
