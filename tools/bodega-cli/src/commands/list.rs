//! List the cart contents.

use anyhow::Result;
use bodega_store::StoredLine;
use console::style;

use crate::context::Context;

/// Run the list command.
pub fn run(ctx: &mut Context) -> Result<()> {
    if ctx.output.is_json() {
        let records: Vec<StoredLine> = ctx
            .store
            .lines()
            .iter()
            .map(StoredLine::from_line)
            .collect();
        ctx.output.json(&records);
        return Ok(());
    }

    if ctx.store.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    for (index, line) in ctx.store.lines().iter().enumerate() {
        ctx.output.line(&format!(
            "  {} {}  {} x {}  {}",
            style(format!("[{index}]")).dim(),
            style(&line.name).bold(),
            line.unit_price.display(),
            line.quantity,
            style(line.subtotal().display()).bold(),
        ));
    }
    ctx.output.line("");
    ctx.output
        .kv("items", &ctx.store.total_quantity().to_string());
    ctx.output.kv("total", &ctx.store.total_price().display());
    Ok(())
}
