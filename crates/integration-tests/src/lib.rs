//! End-to-end test support for the online shop storefront.
//!
//! [`FakeAuthority`] serves `GET /product` and `POST /product` from an
//! in-process axum server bound to an ephemeral port, so the real
//! `reqwest` client can be exercised without any external service.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p online-shop-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use online_shop_core::{Product, ProductId};
use online_shop_storefront::{ApiConfig, ProductApiClient};
use serde_json::{Value, json};
use url::Url;

/// How the fake answers `GET /product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMode {
    /// `{"Products": [...]}` with the stored products.
    Serve,
    /// `{"Products": null}`.
    NullList,
    /// The given status with a plain-text body.
    Fail(StatusCode),
}

/// How the fake answers `POST /product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateMode {
    /// Store the product under the next id and answer `201 Created`.
    /// Bodies whose `price` or `weight` is not a number get `400`.
    Accept,
    /// The given status with a plain-text body.
    Reject(StatusCode, String),
}

#[derive(Debug)]
struct AuthorityState {
    products: Vec<Product>,
    next_id: i64,
    catalog_mode: CatalogMode,
    create_mode: CreateMode,
    received: Vec<Value>,
    catalog_requests: usize,
}

type SharedState = Arc<Mutex<AuthorityState>>;

/// In-process product authority.
pub struct FakeAuthority {
    base_url: Url,
    state: SharedState,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeAuthority {
    /// Start a server holding `products`. New ids continue after the
    /// highest seeded id.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
        let state = Arc::new(Mutex::new(AuthorityState {
            products,
            next_id,
            catalog_mode: CatalogMode::Serve,
            create_mode: CreateMode::Accept,
            received: Vec::new(),
            catalog_requests: 0,
        }));

        let app = Router::new()
            .route("/product", get(list_products).post(create_product))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener has no local address");
        let base_url =
            Url::parse(&format!("http://{addr}")).expect("socket address is a valid URL");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A client pointed at this server.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> ProductApiClient {
        ProductApiClient::new(&ApiConfig::new(self.base_url.clone()))
            .expect("client for local authority")
    }

    pub fn set_catalog_mode(&self, mode: CatalogMode) {
        self.lock().catalog_mode = mode;
    }

    pub fn set_create_mode(&self, mode: CreateMode) {
        self.lock().create_mode = mode;
    }

    /// Add a product as if another client had created it.
    pub fn insert(&self, product: Product) {
        let mut state = self.lock();
        state.next_id = state.next_id.max(product.id.as_i64() + 1);
        state.products.push(product);
    }

    /// Raw JSON bodies of every `POST /product`, in arrival order.
    #[must_use]
    pub fn received(&self) -> Vec<Value> {
        self.lock().received.clone()
    }

    #[must_use]
    pub fn catalog_requests(&self) -> usize {
        self.lock().catalog_requests
    }

    #[must_use]
    pub fn stored(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, AuthorityState> {
        lock(&self.state)
    }
}

impl Drop for FakeAuthority {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A product with the given id and name, price 5 and weight 1.
#[must_use]
pub fn product(id: i64, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: String::new(),
        image_url: String::new(),
        price: 5.0,
        weight: 1.0,
    }
}

fn lock(state: &SharedState) -> MutexGuard<'_, AuthorityState> {
    state
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_products(State(state): State<SharedState>) -> Response {
    let mut state = lock(&state);
    state.catalog_requests += 1;
    match &state.catalog_mode {
        CatalogMode::Serve => Json(json!({ "Products": state.products })).into_response(),
        CatalogMode::NullList => Json(json!({ "Products": null })).into_response(),
        CatalogMode::Fail(status) => (*status, "catalog unavailable").into_response(),
    }
}

async fn create_product(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    state.received.push(body.clone());

    if let CreateMode::Reject(status, reason) = &state.create_mode {
        return (*status, reason.clone()).into_response();
    }

    let (Some(price), Some(weight)) = (
        body.get("price").and_then(Value::as_f64),
        body.get("weight").and_then(Value::as_f64),
    ) else {
        return (StatusCode::BAD_REQUEST, "price and weight must be numbers").into_response();
    };

    let text = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let created = Product {
        id: ProductId::new(state.next_id),
        name: text("name"),
        description: text("description"),
        image_url: text("image_url"),
        price,
        weight,
    };
    state.next_id += 1;
    state.products.push(created.clone());

    (StatusCode::CREATED, Json(created)).into_response()
}
