//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bodega_cart::Currency;
use bodega_store::{CartStore, FileSlot, CART_KEY};

use crate::output::Output;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".bodega";

/// Execution context for CLI commands.
pub struct Context {
    /// Output handler.
    pub output: Output,
    /// The cart store, hydrated from the file slot.
    pub store: CartStore<FileSlot>,
}

impl Context {
    /// Open the store under `data_dir` (or the default) and hydrate.
    pub fn load(data_dir: Option<&str>, output: Output) -> Result<Self> {
        let dir = data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        output.debug(&format!("cart storage: {}", dir.display()));
        let slot = FileSlot::open(&dir)
            .with_context(|| format!("Failed to open cart storage in {}", dir.display()))?;
        let store = CartStore::open_at(slot, CART_KEY, Currency::PEN);
        Ok(Self { output, store })
    }
}
