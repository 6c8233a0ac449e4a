//! Client-side shopping cart.
//!
//! Entries are snapshots taken at add time and never observe later catalog
//! changes. The cart lives for the session only; it is never persisted or
//! sent anywhere.

use std::sync::Arc;

use online_shop_core::{CartEntry, Product, ProductId};
use tokio::sync::watch;
use tracing::debug;

/// Ordered sequence of cart entries.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct CartStore {
    entries: Arc<watch::Sender<Vec<CartEntry>>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        let (entries, _) = watch::channel(Vec::new());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Copy `product` into a new entry at the end of the cart.
    ///
    /// Always succeeds. Adding the same product twice yields two entries.
    pub fn add(&self, product: &Product) {
        let entry = CartEntry::from(product);
        debug!(product_id = %entry.id, "Adding product to cart");
        self.entries.send_modify(|entries| entries.push(entry));
    }

    /// Remove every entry carrying `id` and return how many were removed.
    ///
    /// This deliberately drops all units of a product at once, not one.
    /// Removing an id that is not in the cart is a no-op.
    pub fn remove(&self, id: ProductId) -> usize {
        let mut removed = 0;
        self.entries.send_if_modified(|entries| {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            removed = before - entries.len();
            removed > 0
        });
        debug!(product_id = %id, removed, "Removed product from cart");
        removed
    }

    /// True iff the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Snapshot of the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<CartEntry> {
        self.entries.borrow().clone()
    }

    /// Receive every committed change to the cart.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartEntry>> {
        self.entries.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_add_grows_by_one() {
        let cart = CartStore::new();
        cart.add(&product(1, "Mug"));
        assert_eq!(cart.len(), 1);
        assert!(!cart.is_empty());
        assert_eq!(cart.entries()[0].id, ProductId::new(1));
    }

    #[test]
    fn test_add_copies_product() {
        let cart = CartStore::new();
        let mut source = product(1, "Mug");
        source.price = 10.0;
        cart.add(&source);

        source.price = 25.0;

        assert!((cart.entries()[0].price - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_drops_every_matching_entry() {
        let cart = CartStore::new();
        let mug = product(1, "Mug");
        cart.add(&mug);
        cart.add(&product(2, "Pen"));
        cart.add(&mug);

        let removed = cart.remove(mug.id);

        assert_eq!(removed, 2);
        let remaining: Vec<ProductId> = cart.entries().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![ProductId::new(2)]);
    }

    #[test]
    fn test_duplicate_add_then_single_remove_empties_cart() {
        let cart = CartStore::new();
        let mug = product(1, "Mug");
        cart.add(&mug);
        cart.add(&mug);

        cart.remove(mug.id);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let cart = CartStore::new();
        cart.add(&product(1, "Mug"));
        let mut rx = cart.subscribe();

        assert_eq!(cart.remove(ProductId::new(99)), 0);
        assert_eq!(cart.len(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_subscribers_see_additions() {
        let cart = CartStore::new();
        let mut rx = cart.subscribe();

        cart.add(&product(1, "Mug"));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
