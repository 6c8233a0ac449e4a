//! One-shot product creation.
//!
//! # Usage
//!
//! ```bash
//! shop create -n Pen -d "Blue ink" -p 2 -w 0.1
//! ```
//!
//! Numeric fields are coerced the same way the interactive form does it:
//! empty input is left unset and unparseable input is sent as not-a-number
//! for the authority to reject.

use online_shop_core::DraftProduct;
use online_shop_storefront::{StorefrontConfig, StorefrontError};

use crate::render;

/// Raw form input for a new product.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub weight: String,
}

impl ProductInput {
    /// Fill a draft from the raw input.
    #[must_use]
    pub fn into_draft(self) -> DraftProduct {
        let mut draft = DraftProduct {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            ..DraftProduct::default()
        };
        draft.set_price_input(&self.price);
        draft.set_weight_input(&self.weight);
        draft
    }
}

/// Submit a product and print what the authority stored.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the submit fails.
pub async fn create(config: &StorefrontConfig, input: ProductInput) -> Result<(), StorefrontError> {
    let session = super::connect(config)?;
    let draft = input.into_draft();
    session.creation().set_draft(draft);

    let product = session.submit().await?;
    render::created(&product);
    Ok(())
}

#[cfg(test)]
mod tests {
    use online_shop_core::DEFAULT_WEIGHT;

    use super::*;

    #[test]
    fn test_into_draft_coerces_numbers() {
        let input = ProductInput {
            name: "Pen".to_string(),
            price: "2".to_string(),
            weight: "0.1".to_string(),
            ..ProductInput::default()
        };

        let draft = input.into_draft();

        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.price, Some(2.0));
        assert_eq!(draft.weight, Some(0.1));
    }

    #[test]
    fn test_into_draft_empty_price_is_unset() {
        let input = ProductInput {
            name: "Pen".to_string(),
            weight: "1".to_string(),
            ..ProductInput::default()
        };

        let draft = input.into_draft();

        assert_eq!(draft.price, None);
        assert_eq!(draft.weight, Some(DEFAULT_WEIGHT));
    }
}
