//! Catalog lookups used by the cart store.

use crate::ids::ProductId;
use async_trait::async_trait;
use shoecart_data::{CatalogClient, FetchError, ProductRecord, StockRecord};

/// Read access to product data and stock levels.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Display data for a product.
    async fn product(&self, id: ProductId) -> Result<ProductRecord, FetchError>;

    /// Current stock ceiling for a product.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError>;
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn product(&self, id: ProductId) -> Result<ProductRecord, FetchError> {
        CatalogClient::product(self, id.get()).await
    }

    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        CatalogClient::stock(self, id.get()).await
    }
}
