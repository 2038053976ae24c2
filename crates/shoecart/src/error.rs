//! Cart error types.

use crate::ids::ProductId;
use shoecart_data::FetchError;
use thiserror::Error;

/// Errors that can abort a cart operation.
///
/// These never reach store callers; the store turns them into a
/// [`Toast`](crate::Toast) instead.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested amount is above the stock ceiling.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Item already in cart.
    #[error("Item already in cart: {0}")]
    DuplicateItem(ProductId),

    /// Amount must be at least one.
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Product or stock lookup failed.
    #[error("Catalog lookup failed: {0}")]
    Lookup(#[from] FetchError),
}
