//! Demo checkout for Bodega.
//!
//! A deliberately small flow: cart review, a demo login that records an
//! email, payment method selection, and an order confirmation snapshot.
//! Nothing is authenticated and nothing is charged.
//!
//! The flow never touches storage itself; the caller completes it against
//! the current cart and then clears the store.

mod error;
mod flow;
mod order;
mod payment;
mod shopper;

pub use error::CheckoutError;
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{OrderConfirmation, OrderId};
pub use payment::PaymentMethod;
pub use shopper::Shopper;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CheckoutError, CheckoutFlow, CheckoutStep, OrderConfirmation, OrderId, PaymentMethod,
        Shopper,
    };
}
