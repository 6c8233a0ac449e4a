//! A single shopping session.
//!
//! Wires one catalog, one cart, and one creation controller to a product
//! authority. This is the surface a presentation layer talks to: it
//! forwards user intents here and re-renders from the views or the store
//! subscriptions.

use std::sync::Arc;

use online_shop_core::{CartEntry, DraftProduct, Product, ProductId};
use tracing::{debug, instrument};

use crate::api::ProductApi;
use crate::config::StorefrontConfig;
use crate::controller::ProductCreationController;
use crate::error::{LoadError, StorefrontError, SubmitError};
use crate::store::{CartStore, CatalogStore, LoadOrdering, LoadOutcome};
use crate::views::{CartView, CatalogView};

/// Behavior switches for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub load_ordering: LoadOrdering,
    pub validate_drafts: bool,
}

impl From<&StorefrontConfig> for SessionOptions {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            load_ordering: config.load_ordering,
            validate_drafts: config.validate_drafts,
        }
    }
}

/// In-memory shopping session.
pub struct Session<A> {
    api: Arc<A>,
    catalog: CatalogStore,
    cart: CartStore,
    creation: ProductCreationController<A>,
}

impl<A: ProductApi> Session<A> {
    /// Create a session with an empty catalog and cart.
    ///
    /// Nothing is fetched until [`Session::start`].
    #[must_use]
    pub fn new(api: A, options: SessionOptions) -> Self {
        let api = Arc::new(api);
        let catalog = CatalogStore::new(options.load_ordering);
        let creation = ProductCreationController::new(
            Arc::clone(&api),
            catalog.clone(),
            options.validate_drafts,
        );
        Self {
            api,
            catalog,
            cart: CartStore::new(),
            creation,
        }
    }

    /// Issue the session-start catalog load.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the fetch fails; the catalog stays empty.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<LoadOutcome, LoadError> {
        debug!("Starting session");
        self.catalog.load(self.api.as_ref()).await
    }

    /// Fetch the catalog again, replacing the current one on success.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the fetch fails; the catalog is unchanged.
    pub async fn reload(&self) -> Result<LoadOutcome, LoadError> {
        self.catalog.load(self.api.as_ref()).await
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.add(product);
    }

    /// Add the first catalog product carrying `id` to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NotInCatalog` if no such product is loaded.
    pub fn add_to_cart_by_id(&self, id: ProductId) -> Result<CartEntry, StorefrontError> {
        let product = self
            .catalog
            .find(id)
            .ok_or(StorefrontError::NotInCatalog(id))?;
        self.cart.add(&product);
        Ok(CartEntry::from(&product))
    }

    /// Remove every cart entry carrying `id`.
    pub fn remove_from_cart(&self, id: ProductId) -> usize {
        self.cart.remove(id)
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut DraftProduct)) {
        self.creation.edit_draft(edit);
    }

    /// Submit the current draft.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` on failure; the draft keeps the user's input.
    pub async fn submit(&self) -> Result<Product, SubmitError> {
        self.creation.submit().await
    }

    #[must_use]
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::from(self.catalog.products().as_slice())
    }

    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(self.cart.entries().as_slice())
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn creation(&self) -> &ProductCreationController<A> {
        &self.creation
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedApi, product, unavailable};
    use crate::views::EMPTY_CART_MESSAGE;

    #[tokio::test]
    async fn test_mug_scenario() {
        let api = ScriptedApi::new();
        api.push_catalog(Ok(vec![product(1, "Mug")]));
        let session = Session::new(api, SessionOptions::default());

        session.start().await.unwrap();
        assert_eq!(session.catalog().len(), 1);

        let mug = session.catalog().products()[0].clone();
        session.add_to_cart(&mug);
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().entries()[0].id, ProductId::new(1));

        session.remove_from_cart(ProductId::new(1));
        assert!(session.cart().is_empty());
        assert_eq!(session.cart_view().placeholder(), Some(EMPTY_CART_MESSAGE));
    }

    #[tokio::test]
    async fn test_pen_scenario() {
        let api = ScriptedApi::new();
        api.push_catalog(Ok(vec![product(1, "Mug")]));
        let mut pen = product(2, "Pen");
        pen.price = 2.0;
        pen.weight = 0.1;
        api.push_created(Ok(pen));
        let session = Session::new(api, SessionOptions::default());
        session.start().await.unwrap();

        session.edit_draft(|draft| {
            draft.name = "Pen".to_string();
            draft.set_price_input("2");
            draft.set_weight_input("0.1");
        });
        let created = session.submit().await.unwrap();

        assert_eq!(created.id, ProductId::new(2));
        assert_eq!(session.catalog().len(), 2);
        assert!(session.creation().draft().is_pristine());
        assert_eq!(session.catalog_view().items[1].price, "$2");
    }

    #[tokio::test]
    async fn test_failed_start_leaves_empty_catalog() {
        let api = ScriptedApi::new();
        api.push_catalog(Err(unavailable()));
        let session = Session::new(api, SessionOptions::default());

        assert!(session.start().await.is_err());
        assert!(session.catalog_view().placeholder().is_some());
    }

    #[tokio::test]
    async fn test_cart_is_independent_of_catalog_reload() {
        let api = ScriptedApi::new();
        api.push_catalog(Ok(vec![product(1, "Mug")]));
        api.push_catalog(Ok(vec![product(5, "Cap")]));
        let session = Session::new(api, SessionOptions::default());
        session.start().await.unwrap();

        session.add_to_cart_by_id(ProductId::new(1)).unwrap();
        session.reload().await.unwrap();

        assert_eq!(session.cart().entries()[0].name, "Mug");
        assert!(session.catalog().find(ProductId::new(1)).is_none());
    }

    #[tokio::test]
    async fn test_add_unknown_id_is_reported() {
        let session = Session::new(ScriptedApi::new(), SessionOptions::default());

        let err = session.add_to_cart_by_id(ProductId::new(7)).unwrap_err();

        assert!(matches!(err, StorefrontError::NotInCatalog(id) if id == ProductId::new(7)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_options_from_config() {
        let config = StorefrontConfig::from_lookup(|key| match key {
            "SHOP_LOAD_ORDERING" => Some("latest-issued".to_string()),
            "SHOP_VALIDATE_DRAFTS" => Some("true".to_string()),
            _ => None,
        })
        .unwrap();

        let options = SessionOptions::from(&config);

        assert_eq!(options.load_ordering, LoadOrdering::LatestIssuedWins);
        assert!(options.validate_drafts);
    }
}
