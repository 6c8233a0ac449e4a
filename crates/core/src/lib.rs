//! Online Shop Core - Shared types library.
//!
//! This crate provides the types used across all online shop components:
//! - `storefront` - Client-side catalog, cart, and product creation state
//! - `cli` - Terminal presentation layer
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients, no async. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, catalog products, drafts, and cart entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
