//! Add a product to the cart.

use anyhow::Result;
use bodega_cart::Money;

use super::AddArgs;
use crate::context::Context;

/// Run the add command.
pub fn run(args: AddArgs, ctx: &mut Context) -> Result<()> {
    let currency = ctx.store.cart().currency();
    let unit_price = Money::from_decimal(args.price, currency);

    ctx.store
        .add(args.name.clone(), unit_price, args.image, args.qty)?;

    ctx.output
        .success(&format!("{} added to cart ({})", args.name, args.qty));
    ctx.output
        .kv("items", &ctx.store.total_quantity().to_string());
    ctx.output.kv("total", &ctx.store.total_price().display());
    Ok(())
}
