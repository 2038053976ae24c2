//! Type-safe key-value persistence for ShoeCart.
//!
//! Provides a simple, ergonomic API for storing data in a key-value store
//! with automatic JSON serialization. Two backends ship with the crate:
//! [`MemoryStore`] and the directory-backed [`FileStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shoecart_cache::{cache_key, Cache};
//!
//! let cache = Cache::open(".shoecart")?;
//! let key = cache_key!("@RocketShoes", "cart");
//!
//! // Store a value
//! cache.set(&key, &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<LineItem>> = cache.get(&key)?;
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{cache_key, Cache, CacheError, KeyValueStore};
}
