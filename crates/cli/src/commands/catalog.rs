//! Catalog listing.
//!
//! # Usage
//!
//! ```bash
//! shop catalog
//! SHOP_API_URL=http://shop.internal:8082 shop catalog
//! ```

use online_shop_storefront::{StorefrontConfig, StorefrontError};

use crate::render;

/// Fetch the catalog once and print it.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the fetch fails.
pub async fn list(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let session = super::connect(config)?;
    session.start().await?;
    render::catalog(&session.catalog_view());
    Ok(())
}
