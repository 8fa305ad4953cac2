//! Cart totals: the badge count and the price total.

use anyhow::Result;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct Totals {
    items: i64,
    total: String,
}

/// Run the count command (the navbar badge number).
pub fn count(ctx: &mut Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": ctx.store.total_quantity()
        }));
        return Ok(());
    }
    ctx.output.line(&ctx.store.total_quantity().to_string());
    Ok(())
}

/// Run the total command.
pub fn total(ctx: &mut Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&Totals {
            items: ctx.store.total_quantity(),
            total: ctx.store.total_price().display_amount(),
        });
        return Ok(());
    }
    ctx.output.line(&ctx.store.total_price().display());
    Ok(())
}
