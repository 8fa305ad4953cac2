//! Wire records for the durable slot.
//!
//! The slot holds a JSON array of flat records:
//!
//! ```json
//! [{ "name": "Alpaca mug", "price": 25.0, "img": "mug.png", "quantity": 2 }]
//! ```
//!
//! `price` is a decimal number on the wire and a minor-unit [`Money`] in
//! memory; `img` is an empty string when the line has no image.

use bodega_cart::{CartLine, Currency, Money};
use serde::{Deserialize, Serialize};

/// One cart line as stored in the slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredLine {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub img: String,
    pub quantity: i64,
}

impl StoredLine {
    /// Convert a domain line to its wire form.
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.unit_price.to_decimal(),
            img: line.image.clone().unwrap_or_default(),
            quantity: line.quantity,
        }
    }

    /// Convert a wire record back to a domain line.
    ///
    /// Returns `None` for records that violate the cart invariants
    /// (quantity below 1, negative or non-finite price); hydration drops
    /// such records rather than failing the whole load.
    pub fn into_line(self, currency: Currency) -> Option<CartLine> {
        if !self.price.is_finite() {
            return None;
        }
        let unit_price = Money::from_decimal(self.price, currency);
        let image = if self.img.is_empty() {
            None
        } else {
            Some(self.img)
        };
        CartLine::new(self.name, unit_price, image, self.quantity).ok()
    }
}
