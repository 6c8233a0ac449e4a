//! Subcommand implementations.

pub mod catalog;
pub mod create;
pub mod session;

use online_shop_storefront::{
    ApiError, ProductApiClient, Session, SessionOptions, StorefrontConfig,
};

/// Build a session against the configured product authority.
fn connect(config: &StorefrontConfig) -> Result<Session<ProductApiClient>, ApiError> {
    let client = ProductApiClient::new(&config.api)?;
    tracing::debug!(endpoint = %client.endpoint(), "Connecting to product authority");
    Ok(Session::new(client, SessionOptions::from(config)))
}
