//! In-memory product authority for unit tests.
//!
//! Replies are queued in call order. A deferred reply keeps its request
//! pending until the test sends the result, which lets tests decide the
//! order in which overlapping requests resolve.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use online_shop_core::{NewProduct, Product, ProductId};
use tokio::sync::oneshot;

use crate::api::{ApiError, ProductApi};

type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

#[derive(Default)]
pub struct ScriptedApi {
    catalog_replies: Mutex<VecDeque<Reply<Vec<Product>>>>,
    create_replies: Mutex<VecDeque<Reply<Product>>>,
    created_payloads: Mutex<Vec<NewProduct>>,
    fetch_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_catalog(&self, result: Result<Vec<Product>, ApiError>) {
        self.defer_catalog().send(result).unwrap();
    }

    pub fn defer_catalog(&self) -> oneshot::Sender<Result<Vec<Product>, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.catalog_replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn push_created(&self, result: Result<Product, ApiError>) {
        self.defer_created().send(result).unwrap();
    }

    pub fn defer_created(&self) -> oneshot::Sender<Result<Product, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.create_replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn created_payloads(&self) -> Vec<NewProduct> {
        self.created_payloads.lock().unwrap().clone()
    }
}

impl ProductApi for ScriptedApi {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.catalog_replies.lock().unwrap().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(unavailable())),
            None => Err(unavailable()),
        }
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.created_payloads.lock().unwrap().push(product.clone());
        let reply = self.create_replies.lock().unwrap().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(unavailable())),
            None => Err(unavailable()),
        }
    }
}

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

pub fn unavailable() -> ApiError {
    ApiError::Status {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

pub fn rejected(reason: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        body: reason.to_string(),
    }
}
