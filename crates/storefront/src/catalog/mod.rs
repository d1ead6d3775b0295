//! Read-only client for the external product catalog API.
//!
//! # Architecture
//!
//! - Plain REST/JSON over `reqwest`; the catalog is the source of truth
//! - No caching and no retry: every call is one request, and failures
//!   surface as a single [`CatalogError`] for the caller's loading/error UI
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//!
//! let products = client.get_products().await?;
//! let product = client.get_product(ProductId::new(1)).await?;
//! ```

mod types;

pub use types::{Product, Rating};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use vitrine_core::ProductId;

use crate::config::CatalogConfig;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the read-only product catalog API.
///
/// Cheap to clone; all clones share one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Execute a GET request and decode the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// Get the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    /// Get a single product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the API request
    /// fails. The catalog answers an unknown id with an empty body rather
    /// than a 404, so both map to [`CatalogError::NotFound`].
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let not_found = || CatalogError::NotFound(format!("product {id}"));

        match self
            .get_json::<Option<Product>>(&format!("/products/{id}"))
            .await
        {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(not_found()),
            Err(CatalogError::Status(status)) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(not_found())
            }
            // An empty body is "not found", not a malformed response
            Err(CatalogError::Parse(e)) if e.is_eof() => Err(not_found()),
            Err(e) => Err(e),
        }
    }

    /// Get the list of category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/products/categories").await
    }

    /// Get the products belonging to one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let path = format!("/products/category/{}", urlencoding::encode(category));
        self.get_json(&path).await
    }
}
