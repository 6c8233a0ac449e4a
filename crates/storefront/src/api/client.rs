//! HTTP implementation of [`ProductApi`].

use std::sync::Arc;

use online_shop_core::{CatalogResponse, NewProduct, Product};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::{ApiError, ProductApi};
use crate::config::ApiConfig;

/// Longest response body excerpt kept in logs and errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Client for the product authority's REST API.
#[derive(Clone)]
pub struct ProductApiClient {
    inner: Arc<ProductApiClientInner>,
}

struct ProductApiClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl ProductApiClient {
    /// Create a new product API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot take a path or the HTTP
    /// client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let endpoint = product_endpoint(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(ProductApiClientInner {
                client: builder.build()?,
                endpoint,
            }),
        })
    }

    /// The resolved `/product` URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }
}

impl ProductApi for ProductApiClient {
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .send()
            .await?;

        let catalog: CatalogResponse = read_json(response).await?;
        let products = catalog.into_products();
        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    #[instrument(
        skip(self, product),
        fields(endpoint = %self.inner.endpoint, name = %product.name)
    )]
    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(product)
            .send()
            .await?;

        let created: Product = read_json(response).await?;
        debug!(product_id = %created.id, "Authority created product");
        Ok(created)
    }
}

/// Append a `product` segment to the base URL, keeping any base path.
fn product_endpoint(base: &Url) -> Result<Url, ApiError> {
    let mut endpoint = base.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| ApiError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push("product");
    Ok(endpoint)
}

/// Check the status and decode a JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    // Get response body as text first for better error diagnostics
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %excerpt(&body),
            "Product API returned non-success status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: excerpt(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %excerpt(&body),
            "Failed to parse product API response"
        );
        ApiError::Parse(e)
    })
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn endpoint_for(base: &str) -> Result<Url, ApiError> {
        product_endpoint(&Url::parse(base).unwrap())
    }

    #[test]
    fn test_endpoint_from_bare_host() {
        let url = endpoint_for("http://localhost:8082").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8082/product");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint_for("https://shop.example/api/").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/api/product");

        let url = endpoint_for("https://shop.example/api").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/api/product");
    }

    #[test]
    fn test_endpoint_rejects_cannot_be_base() {
        let err = endpoint_for("mailto:shop@example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_client_exposes_endpoint() {
        let config = ApiConfig::new(Url::parse("http://127.0.0.1:9999").unwrap());
        let client = ProductApiClient::new(&config).unwrap();
        assert_eq!(client.endpoint().path(), "/product");
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "x".repeat(BODY_EXCERPT_CHARS * 2);
        assert_eq!(excerpt(&long).len(), BODY_EXCERPT_CHARS);
        assert_eq!(excerpt("short"), "short");
    }
}
