//! Cart line items.

use crate::error::CartError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// The product name is the de-facto unique key: the catalog has no product
/// id, and adding a name that is already present merges into the existing
/// line instead of appending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product name (unique within a cart).
    pub name: String,
    /// Price per unit.
    pub unit_price: Money,
    /// Product image URL or path, if any.
    pub image: Option<String>,
    /// Number of units. Always at least 1.
    pub quantity: i64,
}

impl CartLine {
    /// Create a new line item.
    ///
    /// Returns an error if the quantity is below 1, the unit price is
    /// negative, or the subtotal would overflow.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        image: Option<String>,
        quantity: i64,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CartError::NegativeUnitPrice(name));
        }
        if unit_price.try_multiply(quantity).is_none() {
            return Err(CartError::Overflow);
        }
        Ok(Self {
            name,
            unit_price,
            image,
            quantity,
        })
    }

    /// Subtotal for this line (`unit_price * quantity`).
    ///
    /// Quantity is overflow-checked at every mutation, so the saturation
    /// here is not reachable through the public API.
    pub fn subtotal(&self) -> Money {
        Money::new(
            self.unit_price.amount_cents.saturating_mul(self.quantity),
            self.unit_price.currency,
        )
    }
}
