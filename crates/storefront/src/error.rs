//! Error types for storefront operations.
//!
//! Network failures and authority rejections are deliberately not told
//! apart: a load or submit either succeeded or failed. The wrapped
//! [`ApiError`] is kept for logging only.

use online_shop_core::{DraftError, ProductId};
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// A catalog load did not complete. The catalog is unchanged.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Catalog fetch failed: {0}")]
    Failed(#[source] ApiError),
}

/// A product submission did not complete. The catalog is unchanged and
/// the draft still holds the user's input.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Product creation failed: {0}")]
    Failed(#[source] ApiError),

    #[error("Draft is not submittable: {0}")]
    InvalidDraft(#[from] DraftError),
}

/// Top-level error for applications built on the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The requested product is not in the local catalog.
    #[error("Product {0} is not in the catalog")]
    NotInCatalog(ProductId),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
