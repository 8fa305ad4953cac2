//! Cart error types.

use thiserror::Error;

/// Errors that can occur when mutating a cart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    /// Quantity is zero or negative.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unit price is negative.
    #[error("negative unit price for {0}")]
    NegativeUnitPrice(String),

    /// No line at the given index.
    #[error("no cart line at index {0}")]
    IndexOutOfBounds(usize),

    /// Line currency differs from the cart currency.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a quantity or subtotal.
    #[error("arithmetic overflow in cart calculation")]
    Overflow,
}
