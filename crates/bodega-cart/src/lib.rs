//! Cart domain types for Bodega.
//!
//! This crate provides the in-memory cart model:
//!
//! - **Money**: minor-unit integer amounts with currency
//! - **CartLine**: one product entry (name, unit price, image, quantity)
//! - **Cart**: the ordered sequence of lines with merge-by-name adds and
//!   derived totals
//!
//! Persistence and change notification live in `bodega-store`; this crate
//! only knows the mutation rules.
//!
//! # Example
//!
//! ```
//! use bodega_cart::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add("Alpaca mug", Money::from_decimal(25.0, Currency::PEN), None, 2)?;
//! cart.add("Alpaca mug", Money::from_decimal(25.0, Currency::PEN), None, 1)?;
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total_price().display_amount(), "75.00");
//! # Ok::<(), bodega_cart::CartError>(())
//! ```

pub mod cart;
pub mod error;
pub mod line;
pub mod money;

pub use cart::Cart;
pub use error::CartError;
pub use line::CartLine;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::Cart;
    pub use crate::error::CartError;
    pub use crate::line::CartLine;
    pub use crate::money::{Currency, Money};
}
