//! Display data for presentation layers.
//!
//! Views are plain snapshots built from store contents; they hold
//! formatted strings and the empty-state placeholder text.

use online_shop_core::{CartEntry, Product, ProductId};

/// Shown instead of the product list when the catalog is empty.
pub const EMPTY_CATALOG_MESSAGE: &str = "No products available";

/// Shown instead of cart rows when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub weight: String,
}

/// Catalog display data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogView {
    pub items: Vec<ProductView>,
}

impl CatalogView {
    /// Placeholder text to render instead of rows, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(EMPTY_CATALOG_MESSAGE)
    }
}

/// Cart row display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: usize,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Placeholder text to render instead of rows, if any.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(EMPTY_CART_MESSAGE)
        } else {
            None
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a price as the authority sent it, without rounding.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}

/// Format a weight in kilograms.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    format!("{weight}kg")
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: format_price(product.price),
            weight: format_weight(product.weight),
        }
    }
}

impl From<&[Product]> for CatalogView {
    fn from(products: &[Product]) -> Self {
        Self {
            items: products.iter().map(ProductView::from).collect(),
        }
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            price: format_price(entry.price),
        }
    }
}

impl From<&[CartEntry]> for CartView {
    fn from(entries: &[CartEntry]) -> Self {
        Self {
            items: entries.iter().map(CartItemView::from).collect(),
            item_count: entries.len(),
        }
    }
}
