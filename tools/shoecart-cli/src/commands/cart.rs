//! Cart commands.
//!
//! Failed cart operations are shown as toasts by the store's notifier and
//! are not command errors.

use anyhow::Result;
use shoecart::UpdateProductAmount;

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;

/// Print the current cart.
pub async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.output.cart(&store.cart());
    Ok(())
}

/// Add one unit of a product.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    store.add_product(args.product_id).await;
    ctx.output.cart(&store.cart());
    Ok(())
}

/// Remove a product.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    store.remove_product(args.product_id);
    ctx.output.cart(&store.cart());
    Ok(())
}

/// Set a product's amount.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    store
        .update_product_amount(UpdateProductAmount::new(args.product_id, args.amount))
        .await;
    ctx.output.cart(&store.cart());
    Ok(())
}
