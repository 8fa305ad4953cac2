//! Empty the cart.

use anyhow::Result;

use crate::context::Context;

/// Run the clear command.
pub fn run(ctx: &mut Context) -> Result<()> {
    ctx.store.clear()?;
    ctx.output.success("Cart emptied");
    Ok(())
}
