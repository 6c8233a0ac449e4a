//! Client-side catalog store.
//!
//! The catalog only changes in two ways: a successful [`CatalogStore::load`]
//! replaces the whole sequence, and [`CatalogStore::append`] adds one
//! product at the end. Nothing here edits or deletes an existing entry.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use online_shop_core::{Product, ProductId};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::api::ProductApi;
use crate::error::LoadError;

/// How responses from overlapping loads are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadOrdering {
    /// Whichever response resolves last determines the catalog.
    #[default]
    LastResolvedWins,
    /// A response older than one already applied is discarded.
    LatestIssuedWins,
}

impl FromStr for LoadOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-resolved" | "last_resolved" => Ok(Self::LastResolvedWins),
            "latest-issued" | "latest_issued" => Ok(Self::LatestIssuedWins),
            other => Err(format!(
                "expected 'last-resolved' or 'latest-issued', got '{other}'"
            )),
        }
    }
}

/// What a successful load did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog now holds exactly `count` products from this response.
    Replaced { count: usize },
    /// A newer load had already been applied; this response was dropped.
    Stale,
}

/// Authoritative in-memory product list.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogStoreInner>,
}

struct CatalogStoreInner {
    products: watch::Sender<Vec<Product>>,
    ordering: LoadOrdering,
    /// Sequence token handed to the most recently issued load.
    issued: AtomicU64,
    /// Highest token whose response has been applied.
    applied: AtomicU64,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(ordering: LoadOrdering) -> Self {
        let (products, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(CatalogStoreInner {
                products,
                ordering,
                issued: AtomicU64::new(0),
                applied: AtomicU64::new(0),
            }),
        }
    }

    /// Fetch the full catalog and replace the local sequence with it.
    ///
    /// Issues exactly one request. On failure the store is left as it was
    /// and the error is returned to the caller; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the fetch fails for any reason.
    #[instrument(skip(self, api), fields(token = tracing::field::Empty))]
    pub async fn load<A: ProductApi>(&self, api: &A) -> Result<LoadOutcome, LoadError> {
        let token = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::Span::current().record("token", token);

        let products = match api.fetch_catalog().await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Catalog load failed, keeping previous catalog");
                return Err(LoadError::Failed(e));
            }
        };

        let outcome = self.replace(token, products);
        match outcome {
            LoadOutcome::Replaced { count } => debug!(count, "Catalog replaced"),
            LoadOutcome::Stale => warn!("Discarding stale catalog response"),
        }
        Ok(outcome)
    }

    /// Swap in a fetched sequence, unless ordering says it is stale.
    fn replace(&self, token: u64, products: Vec<Product>) -> LoadOutcome {
        let mut outcome = LoadOutcome::Stale;
        let inner = &self.inner;
        inner.products.send_if_modified(|current| {
            let newest_applied = inner.applied.load(Ordering::SeqCst);
            if inner.ordering == LoadOrdering::LatestIssuedWins && token < newest_applied {
                return false;
            }
            inner.applied.fetch_max(token, Ordering::SeqCst);
            outcome = LoadOutcome::Replaced {
                count: products.len(),
            };
            *current = products;
            true
        });
        outcome
    }

    /// Add one product to the end of the catalog.
    ///
    /// No deduplication, ordering, or validation: the authority already
    /// accepted this product.
    pub fn append(&self, product: Product) {
        debug!(product_id = %product.id, "Appending product to catalog");
        self.inner.products.send_modify(|products| products.push(product));
    }

    /// Snapshot of the current catalog.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.inner.products.borrow().clone()
    }

    /// First product carrying `id`, if any.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.inner
            .products
            .borrow()
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.borrow().is_empty()
    }

    /// Receive every committed change to the catalog.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.inner.products.subscribe()
    }

    #[must_use]
    pub fn ordering(&self) -> LoadOrdering {
        self.inner.ordering
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(LoadOrdering::default())
    }
}
