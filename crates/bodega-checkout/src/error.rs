//! Checkout errors.
//!
//! The `Display` strings double as the user-facing messages the
//! presentation layer shows.

use thiserror::Error;

/// Checkout error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout attempted (or completed) on an empty cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// Demo login submitted with a blank email or password.
    #[error("please complete both email and password")]
    MissingCredentials,

    /// Step change not allowed from the current step.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A required piece of the flow is missing.
    #[error("checkout incomplete: missing {0}")]
    Incomplete(String),
}
