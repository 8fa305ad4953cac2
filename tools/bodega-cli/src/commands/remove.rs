//! Remove a cart line.

use anyhow::Result;

use super::RemoveArgs;
use crate::context::Context;

/// Run the remove command.
pub fn run(args: RemoveArgs, ctx: &mut Context) -> Result<()> {
    if ctx.store.remove_at(args.index)? {
        ctx.output.success(&format!("Removed line {}", args.index));
        ctx.output.kv("total", &ctx.store.total_price().display());
    } else {
        ctx.output
            .warn(&format!("No cart line at index {}", args.index));
    }
    Ok(())
}
