//! Product authority API.
//!
//! # Architecture
//!
//! - [`ProductApi`] is the seam between the stores and the network. The
//!   stores only ever see a full catalog or a single created product, never
//!   a partial response.
//! - [`ProductApiClient`] implements it over HTTP with `reqwest`.
//!
//! # Endpoints
//!
//! - `GET /product` returns `{"Products": [...]}`
//! - `POST /product` takes a [`NewProduct`] and returns the stored
//!   [`Product`] with its authority-assigned `id`

mod client;

use std::future::Future;

use online_shop_core::{NewProduct, Product};
use thiserror::Error;

pub use client::ProductApiClient;

/// Errors that can occur when talking to the product authority.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authority answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL cannot have a `/product` path appended.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Remote authority for products.
///
/// Implementations must not retry, cache, or merge: each call is exactly
/// one request and reports exactly one outcome.
pub trait ProductApi: Send + Sync {
    /// Fetch the full catalog.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// Ask the authority to create a product.
    fn create_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<Product, ApiError>> + Send;
}
