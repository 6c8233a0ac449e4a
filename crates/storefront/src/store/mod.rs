//! Client-side state stores.
//!
//! Each store publishes its full state through a `tokio::sync::watch`
//! channel so a presentation layer can re-render on change. Mutations are
//! synchronous and never hold a lock across an await point.

mod cart;
mod catalog;

pub use cart::CartStore;
pub use catalog::{CatalogStore, LoadOrdering, LoadOutcome};
