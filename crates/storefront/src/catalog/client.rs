//! HTTP implementation of the catalog API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use swiftcart_core::types::{Product, ProductId};
use tracing::debug;

use super::{CatalogApi, CatalogError};

/// Client for a fakestore-shaped product catalog API.
///
/// Sub-resources, relative to the configured base URL:
/// `/categories`, `/category/{label}`, `/{id}`, plus a `limit` query
/// parameter on product listings.
#[derive(Clone)]
pub struct HttpCatalogClient {
    inner: Arc<HttpCatalogClientInner>,
}

struct HttpCatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a new catalog client.
    ///
    /// `base_url` must not end with a slash (config already guarantees
    /// this).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(HttpCatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn products_url(&self, category: Option<&str>) -> String {
        match category {
            Some(label) => format!("{}/category/{label}", self.inner.base_url),
            None => self.inner.base_url.clone(),
        }
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// The body is read as text first so a decode failure can log what the
    /// API actually sent.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        limit: Option<u32>,
    ) -> Result<T, CatalogError> {
        debug!(url, ?limit, "catalog request");

        let mut request = self.inner.client.get(url);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                %status,
                url,
                body = %body.chars().take(200).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                url: url.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                url,
                body = %body.chars().take(200).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/categories", self.inner.base_url);
        self.get_json(&url, None).await
    }

    async fn list_products(
        &self,
        category: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(category);
        self.get_json(&url, limit).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}/{id}", self.inner.base_url);

        // The API answers an unknown id with a 404 or a literal `null`
        // body; both mean "no such product".
        match self.get_json::<Option<Product>>(&url, None).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(CatalogError::NotFound(id)),
            Err(CatalogError::Status { status, .. })
                if status == reqwest::StatusCode::NOT_FOUND =>
            {
                Err(CatalogError::NotFound(id))
            }
            Err(e) => Err(e),
        }
    }
}
