//! Shared fixtures for cart store tests.

#![allow(dead_code)]

use async_trait::async_trait;
use shoecart::{Catalog, CartStore, MemoryNotifier, ProductId};
use shoecart_cache::{Cache, CacheError, KeyValueStore};
use shoecart_data::{FetchError, ProductRecord, StockRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory catalog with adjustable stock and optional gating of lookups.
#[derive(Default)]
pub struct FakeCatalog {
    products: Mutex<HashMap<u64, ProductRecord>>,
    stock: Mutex<HashMap<u64, i64>>,
    failing: Mutex<Vec<u64>>,
    gate: Mutex<Option<Arc<Notify>>>,
    lookups: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, id: u64, title: &str, price: f64, stock: i64) -> Self {
        self.products.lock().unwrap().insert(
            id,
            ProductRecord {
                id,
                title: title.to_string(),
                price,
                image: format!("https://img/{id}.jpg"),
            },
        );
        self.set_stock(id, stock);
        self
    }

    pub fn set_stock(&self, id: u64, amount: i64) {
        self.stock.lock().unwrap().insert(id, amount);
    }

    /// Make every lookup for `id` fail with a server error.
    pub fn fail(&self, id: u64) {
        self.failing.lock().unwrap().push(id);
    }

    /// Suspend the next lookups until the returned handle is notified.
    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    async fn enter(&self, id: u64) -> Result<(), FetchError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing.lock().unwrap().contains(&id) {
            return Err(FetchError::HttpError {
                status: 500,
                message: "boom".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn product(&self, id: ProductId) -> Result<ProductRecord, FetchError> {
        self.enter(id.get()).await?;
        self.products
            .lock()
            .unwrap()
            .get(&id.get())
            .cloned()
            .ok_or_else(|| FetchError::HttpError {
                status: 404,
                message: "{}".into(),
            })
    }

    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        self.enter(id.get()).await?;
        self.stock
            .lock()
            .unwrap()
            .get(&id.get())
            .map(|&amount| StockRecord { amount })
            .ok_or_else(|| FetchError::HttpError {
                status: 404,
                message: "{}".into(),
            })
    }
}

/// Store that reads as empty and rejects every write.
pub struct RejectingStore;

impl KeyValueStore for RejectingStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::StoreError("disk full".into()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::StoreError("disk full".into()))
    }

    fn exists(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(false)
    }
}

pub struct Harness {
    pub catalog: Arc<FakeCatalog>,
    pub notifier: Arc<MemoryNotifier>,
    pub cache: Cache,
    pub store: CartStore,
}

pub fn harness(catalog: FakeCatalog) -> Harness {
    harness_with_cache(catalog, Cache::in_memory())
}

pub fn harness_with_cache(catalog: FakeCatalog, cache: Cache) -> Harness {
    let catalog = Arc::new(catalog);
    let notifier = Arc::new(MemoryNotifier::new());
    let store = CartStore::new(catalog.clone(), notifier.clone(), cache.clone());
    Harness {
        catalog,
        notifier,
        cache,
        store,
    }
}

/// `(id, amount)` pairs in cart order.
pub fn contents(store: &CartStore) -> Vec<(u64, i64)> {
    store
        .cart()
        .iter()
        .map(|item| (item.id.get(), item.amount))
        .collect()
}
