//! Change the quantity of a cart line.

use anyhow::Result;

use super::QtyArgs;
use crate::context::Context;

/// Run the qty command.
///
/// A rejected quantity is not a process failure: the stored value is shown
/// again, the way the original form resets its input box.
pub fn run(args: QtyArgs, ctx: &mut Context) -> Result<()> {
    match ctx.store.set_quantity(args.index, args.qty) {
        Ok(()) => {
            ctx.output
                .success(&format!("Line {} quantity set to {}", args.index, args.qty));
            ctx.output.kv("total", &ctx.store.total_price().display());
        }
        Err(e) => {
            ctx.output.warn(&e.to_string());
            if let Some(line) = ctx.store.lines().get(args.index) {
                ctx.output
                    .info(&format!("Quantity stays at {}", line.quantity));
            }
        }
    }
    Ok(())
}
