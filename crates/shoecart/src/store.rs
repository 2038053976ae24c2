//! The cart store: session cart state, its operations and persistence.

use crate::cart::{Cart, LineItem};
use crate::catalog::Catalog;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::notify::{Notifier, Toast};
use shoecart_cache::{cache_key, Cache};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Namespace of every key this crate persists.
pub const STORAGE_NAMESPACE: &str = "@RocketShoes";

/// Key the cart is persisted under (`@RocketShoes:cart`).
pub fn cart_storage_key() -> String {
    cache_key!(STORAGE_NAMESPACE, "cart")
}

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Desired amount. Zero or negative requests are ignored.
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: impl Into<ProductId>, amount: i64) -> Self {
        Self {
            product_id: product_id.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Remove,
    Update,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Add => "add_product",
            Operation::Remove => "remove_product",
            Operation::Update => "update_product_amount",
        }
    }

    fn toast_for(self, err: &CartError) -> Toast {
        match (self, err) {
            (Operation::Remove, _) => Toast::RemoveFailed,
            (_, CartError::InsufficientStock { .. }) => Toast::OutOfStock,
            (Operation::Add, _) => Toast::AddFailed,
            (Operation::Update, _) => Toast::UpdateFailed,
        }
    }
}

/// Holds the session cart and mirrors every successful change to storage.
///
/// Each operation works on the snapshot taken when it was called. Two
/// operations interleaved across a catalog lookup therefore race: whichever
/// commits last wins and the other's change is lost. Failures are never
/// returned; they are reported once through the [`Notifier`] and leave the
/// cart untouched.
pub struct CartStore {
    catalog: Arc<dyn Catalog>,
    notifier: Arc<dyn Notifier>,
    cache: Cache,
    key: String,
    cart: RwLock<Cart>,
}

impl CartStore {
    /// Create a store, loading any cart persisted in `cache`.
    ///
    /// A missing or unreadable persisted cart yields an empty cart.
    pub fn new(catalog: Arc<dyn Catalog>, notifier: Arc<dyn Notifier>, cache: Cache) -> Self {
        let key = cart_storage_key();
        let cart = load_cart(&cache, &key);
        debug!(items = cart.len(), "cart loaded");
        Self {
            catalog,
            notifier,
            cache,
            key,
            cart: RwLock::new(cart),
        }
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.cart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart is incremented if stock allows; a new
    /// product is fetched from the catalog and appended with amount one.
    pub async fn add_product(&self, product_id: impl Into<ProductId>) {
        let product_id = product_id.into();
        let snapshot = self.cart();
        match self.try_add(snapshot, product_id).await {
            Ok(cart) => {
                info!(%product_id, "product added");
                self.commit(cart);
            }
            Err(err) => self.report(Operation::Add, product_id, err),
        }
    }

    async fn try_add(&self, mut cart: Cart, product_id: ProductId) -> Result<Cart, CartError> {
        if let Some(current) = cart.get(product_id).map(|item| item.amount) {
            let stock = self.catalog.stock(product_id).await?;
            debug!(%product_id, current, stock = stock.amount, "stock checked");
            if current >= stock.amount {
                return Err(CartError::InsufficientStock {
                    product_id,
                    requested: current.saturating_add(1),
                    available: stock.amount,
                });
            }
            cart.increment(product_id)?;
        } else {
            let product = self.catalog.product(product_id).await?;
            cart.push(LineItem::from_product(product))?;
        }
        Ok(cart)
    }

    /// Remove a product from the cart.
    ///
    /// Removing a product that is not in the cart is reported as a failure.
    pub fn remove_product(&self, product_id: impl Into<ProductId>) {
        let product_id = product_id.into();
        let mut cart = self.cart();
        match cart.remove(product_id) {
            Ok(_) => {
                info!(%product_id, "product removed");
                self.commit(cart);
            }
            Err(err) => self.report(Operation::Remove, product_id, err),
        }
    }

    /// Set a product's amount, bounded by its current stock.
    pub async fn update_product_amount(&self, update: UpdateProductAmount) {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            debug!(%product_id, amount, "ignoring non-positive amount");
            return;
        }

        let snapshot = self.cart();
        match self.try_update(snapshot, product_id, amount).await {
            Ok(cart) => {
                info!(%product_id, amount, "product amount updated");
                self.commit(cart);
            }
            Err(err) => self.report(Operation::Update, product_id, err),
        }
    }

    async fn try_update(
        &self,
        mut cart: Cart,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Cart, CartError> {
        let stock = self.catalog.stock(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }
        cart.set_amount(product_id, amount)?;
        Ok(cart)
    }

    /// Replace the in-memory cart, then overwrite the persisted copy.
    fn commit(&self, cart: Cart) {
        let mut current = self.cart.write().unwrap_or_else(PoisonError::into_inner);
        *current = cart;
        if let Err(err) = self.cache.set(&self.key, &*current) {
            warn!(error = %err, key = %self.key, "failed to persist cart");
        }
    }

    fn report(&self, op: Operation, product_id: ProductId, err: CartError) {
        let toast = op.toast_for(&err);
        warn!(
            operation = op.name(),
            %product_id,
            error = %err,
            toast = toast.message(),
            "cart operation failed"
        );
        self.notifier.error(toast);
    }
}

fn load_cart(cache: &Cache, key: &str) -> Cart {
    let items = match cache.get::<Vec<LineItem>>(key) {
        Ok(Some(items)) => items,
        Ok(None) => return Cart::new(),
        Err(err) => {
            warn!(error = %err, key, "unreadable persisted cart, starting empty");
            return Cart::new();
        }
    };
    Cart::from_items(items).unwrap_or_else(|err| {
        warn!(error = %err, key, "invalid persisted cart, starting empty");
        Cart::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoecart_data::FetchError;

    #[test]
    fn test_storage_key() {
        assert_eq!(cart_storage_key(), "@RocketShoes:cart");
    }

    #[test]
    fn test_toast_mapping() {
        let id = ProductId::new(1);
        let stock = CartError::InsufficientStock {
            product_id: id,
            requested: 2,
            available: 1,
        };
        let lookup = CartError::Lookup(FetchError::Timeout);
        let missing = CartError::ItemNotInCart(id);

        assert_eq!(Operation::Add.toast_for(&stock), Toast::OutOfStock);
        assert_eq!(Operation::Add.toast_for(&lookup), Toast::AddFailed);
        assert_eq!(Operation::Update.toast_for(&stock), Toast::OutOfStock);
        assert_eq!(Operation::Update.toast_for(&lookup), Toast::UpdateFailed);
        assert_eq!(Operation::Update.toast_for(&missing), Toast::UpdateFailed);
        assert_eq!(Operation::Remove.toast_for(&missing), Toast::RemoveFailed);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let cache = Cache::in_memory();
        let item = LineItem {
            id: ProductId::new(1),
            title: "Shoe".into(),
            price: 1.0,
            image: "x".into(),
            amount: 1,
        };
        cache
            .set(&cart_storage_key(), &vec![item.clone(), item])
            .unwrap();
        assert!(load_cart(&cache, &cart_storage_key()).is_empty());
    }

    #[test]
    fn test_load_unreadable_is_empty() {
        let cache = Cache::in_memory();
        cache.set(&cart_storage_key(), &"garbage").unwrap();
        assert!(load_cart(&cache, &cart_storage_key()).is_empty());
    }
}
