//! Product creation flow.
//!
//! The controller owns the draft form. A successful submit appends the
//! authority's product to the catalog and resets the draft; a failed
//! submit changes nothing, so the user can simply try again.

use std::sync::Arc;

use online_shop_core::{DraftProduct, Product};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::api::ProductApi;
use crate::error::SubmitError;
use crate::store::CatalogStore;

/// Validates and submits drafts, feeding results into the catalog.
pub struct ProductCreationController<A> {
    api: Arc<A>,
    catalog: CatalogStore,
    draft: watch::Sender<DraftProduct>,
    validate_drafts: bool,
}

impl<A: ProductApi> ProductCreationController<A> {
    /// Create a controller with an empty draft.
    ///
    /// With `validate_drafts` off, drafts go to the authority as-is and
    /// the authority is the only validator.
    #[must_use]
    pub fn new(api: Arc<A>, catalog: CatalogStore, validate_drafts: bool) -> Self {
        let (draft, _) = watch::channel(DraftProduct::default());
        Self {
            api,
            catalog,
            draft,
            validate_drafts,
        }
    }

    /// Snapshot of the current draft.
    #[must_use]
    pub fn draft(&self) -> DraftProduct {
        self.draft.borrow().clone()
    }

    /// Edit the draft in place.
    pub fn edit_draft(&self, edit: impl FnOnce(&mut DraftProduct)) {
        self.draft.send_modify(edit);
    }

    /// Replace the whole draft.
    pub fn set_draft(&self, draft: DraftProduct) {
        self.draft.send_replace(draft);
    }

    /// Receive every change to the draft, including resets.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DraftProduct> {
        self.draft.subscribe()
    }

    /// Send the current draft to the authority.
    ///
    /// The draft is snapshotted when the call starts. On success it is reset
    /// to the default, so edits made while the request is in flight are
    /// discarded. On failure those edits are kept.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the draft fails the optional check or the
    /// authority call fails. Neither the catalog nor the draft is touched.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<Product, SubmitError> {
        let draft = self.draft();

        if self.validate_drafts
            && let Err(e) = draft.check()
        {
            warn!(error = %e, "Draft rejected before submission");
            return Err(SubmitError::InvalidDraft(e));
        }

        let created = match self.api.create_product(&draft.to_payload()).await {
            Ok(product) => product,
            Err(e) => {
                warn!(error = %e, "Product creation failed, keeping draft");
                return Err(SubmitError::Failed(e));
            }
        };

        self.catalog.append(created.clone());
        self.draft.send_replace(DraftProduct::default());
        info!(product_id = %created.id, "Product created");
        Ok(created)
    }
}
