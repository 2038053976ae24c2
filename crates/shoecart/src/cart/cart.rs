//! Cart and line item types.

use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use shoecart_data::ProductRecord;

/// A shopping cart: line items in insertion order, at most one per product.
///
/// Serializes as a bare array of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from items, rejecting duplicate products and
    /// non-positive amounts.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for item in items {
            cart.push(item)?;
        }
        Ok(cart)
    }

    /// Append a new line item.
    pub fn push(&mut self, item: LineItem) -> Result<(), CartError> {
        if item.amount <= 0 {
            return Err(CartError::InvalidAmount(item.amount));
        }
        if self.contains(item.id) {
            return Err(CartError::DuplicateItem(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Increase an item's amount by one, returning the new amount.
    pub fn increment(&mut self, product_id: ProductId) -> Result<i64, CartError> {
        let item = self.get_mut(product_id)?;
        item.amount = item.amount.saturating_add(1);
        Ok(item.amount)
    }

    /// Set an item's amount.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        if amount <= 0 {
            return Err(CartError::InvalidAmount(amount));
        }
        self.get_mut(product_id)?.amount = amount;
        Ok(())
    }

    /// Remove an item, keeping the order of the rest.
    pub fn remove(&mut self, product_id: ProductId) -> Result<LineItem, CartError> {
        let index = self
            .position(product_id)
            .ok_or(CartError::ItemNotInCart(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.id == product_id)
    }

    fn get_mut(&mut self, product_id: ProductId) -> Result<&mut LineItem, CartError> {
        self.items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CartError::ItemNotInCart(product_id))
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of amounts), saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, item| count.saturating_add(item.amount))
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    /// Quantity held; always at least one.
    pub amount: i64,
}

impl LineItem {
    /// A fresh line item holding one unit of `product`.
    pub fn from_product(product: ProductRecord) -> Self {
        Self {
            id: ProductId::new(product.id),
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Price times amount.
    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}
