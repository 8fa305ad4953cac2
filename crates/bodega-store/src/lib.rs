//! Durable cart storage for Bodega.
//!
//! The cart lives in a single named slot of a key-value backend as a JSON
//! array of flat records. This crate provides the backends
//! ([`MemorySlot`], [`FileSlot`]), the wire record, and the observing
//! [`CartStore`] that keeps an in-memory [`bodega_cart::Cart`] mirrored to
//! the slot and broadcasts [`CartEvent`]s to subscribers.
//!
//! # Example
//!
//! ```
//! use bodega_cart::{Currency, Money};
//! use bodega_store::{CartStore, MemorySlot};
//!
//! let mut store = CartStore::open(MemorySlot::new());
//! store.add("Alpaca mug", Money::from_decimal(25.0, Currency::PEN), None, 2)?;
//!
//! assert_eq!(store.total_quantity(), 2);
//! assert_eq!(store.total_price().display_amount(), "50.00");
//! # Ok::<(), bodega_store::StoreError>(())
//! ```

mod error;
mod event;
mod record;
mod slot;
mod store;

pub use error::StoreError;
pub use event::{CartEvent, StorageEvent};
pub use record::StoredLine;
pub use slot::{FileSlot, MemorySlot, SlotBackend};
pub use store::{CartStore, CART_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartEvent, CartStore, FileSlot, MemorySlot, SlotBackend, StorageEvent, StoreError,
        CART_KEY,
    };
}
