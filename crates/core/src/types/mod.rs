//! Core types for the online shop client.
//!
//! This module provides the product, draft, and cart types shared by the
//! storefront core and its presentation layers.

pub mod cart;
pub mod draft;
pub mod id;
pub mod product;

pub use cart::CartEntry;
pub use draft::{DraftError, DraftField, DraftProduct, coerce_numeric_input};
pub use id::ProductId;
pub use product::{CatalogResponse, DEFAULT_WEIGHT, NewProduct, Product};
