//! Cart entry snapshot type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A purchase-intent record holding a copy of a product's fields.
///
/// Entries never point back into the catalog. Two entries may carry the
/// same `id`; each is a separate purchase unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub weight: f64,
}

impl From<&Product> for CartEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            weight: product.weight,
        }
    }
}
