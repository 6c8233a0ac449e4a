//! Catalog product types and their wire envelopes.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Weight assumed when the authority omits it.
pub const DEFAULT_WEIGHT: f64 = 1.0;

const fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A product as published by the remote authority.
///
/// The client never edits a product in place; every value here is exactly
/// what the authority sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Authority-assigned identifier.
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Unit price. Not validated client-side.
    pub price: f64,
    /// Shipping weight in kilograms.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Body of a `POST /product` request.
///
/// Non-finite numbers serialize as JSON `null`, which is how an
/// unparseable numeric input reaches the authority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub weight: f64,
}

/// Body of a `GET /product` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    /// The authority sends `null` instead of `[]` for an empty catalog.
    #[serde(rename = "Products", default)]
    pub products: Option<Vec<Product>>,
}

impl CatalogResponse {
    /// Unwrap the product sequence, treating `null` as empty.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_weight_defaults_to_one() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Mug","price":5}"#).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert!((product.weight - DEFAULT_WEIGHT).abs() < f64::EPSILON);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_catalog_response_reads_products_field() {
        let body = r#"{"Products":[{"id":1,"name":"Mug","price":5,"weight":1},
                                   {"id":2,"name":"Pen","price":2,"weight":0.1}]}"#;
        let products = serde_json::from_str::<CatalogResponse>(body)
            .unwrap()
            .into_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Pen");
    }

    #[test]
    fn test_catalog_response_null_is_empty() {
        let response: CatalogResponse = serde_json::from_str(r#"{"Products":null}"#).unwrap();
        assert!(response.into_products().is_empty());

        let response: CatalogResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_products().is_empty());
    }

    #[test]
    fn test_new_product_nan_serializes_as_null() {
        let payload = NewProduct {
            name: "Pen".to_string(),
            description: String::new(),
            image_url: String::new(),
            price: f64::NAN,
            weight: 0.1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["price"].is_null());
        assert!((value["weight"].as_f64().unwrap() - 0.1).abs() < f64::EPSILON);
    }
}
