//! Shopping cart state container for the ShoeCart storefront.
//!
//! - **Cart**: ordered line items, one per product
//! - **CartStore**: add / remove / update-amount operations checked
//!   against the catalog's stock, persisted on every change
//! - **Notifier**: where failures go, as one of four fixed [`Toast`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use shoecart::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = CatalogClient::new(ApiConfig::from_host("localhost"));
//! let store = CartStore::new(
//!     Arc::new(catalog),
//!     Arc::new(MemoryNotifier::new()),
//!     Cache::open(".shoecart")?,
//! );
//!
//! store.add_product(1u64).await;
//! store.update_product_amount(UpdateProductAmount::new(1u64, 3)).await;
//! store.remove_product(1u64);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod notify;
pub mod store;

pub use cart::{Cart, LineItem};
pub use catalog::Catalog;
pub use error::CartError;
pub use ids::ProductId;
pub use notify::{MemoryNotifier, Notifier, Toast};
pub use store::{cart_storage_key, CartStore, UpdateProductAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::catalog::Catalog;
    pub use crate::ids::ProductId;
    pub use crate::notify::{MemoryNotifier, Notifier, Toast};
    pub use crate::store::{CartStore, UpdateProductAmount};

    pub use shoecart_cache::Cache;
    pub use shoecart_data::{ApiConfig, CatalogClient};
}
