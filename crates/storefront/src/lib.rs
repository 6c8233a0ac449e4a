//! Online shop storefront library.
//!
//! Client-side state for browsing a product catalog, keeping a cart, and
//! creating new products against a remote product authority. Presentation
//! layers drive a [`Session`] and render from its views or subscriptions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod store;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::{ApiError, ProductApi, ProductApiClient};
pub use config::{ApiConfig, ConfigError, StorefrontConfig};
pub use controller::ProductCreationController;
pub use error::{LoadError, StorefrontError, SubmitError};
pub use session::{Session, SessionOptions};
pub use store::{CartStore, CatalogStore, LoadOrdering, LoadOutcome};
pub use views::{CartItemView, CartView, CatalogView, ProductView};
