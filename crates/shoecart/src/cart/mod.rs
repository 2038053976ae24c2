//! Shopping cart module.
//!
//! Contains the cart and line item types. All mutations are plain
//! in-memory edits; persistence is the store's job.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, LineItem};
