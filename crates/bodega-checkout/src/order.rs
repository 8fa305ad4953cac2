//! Order confirmation produced by a completed checkout.

use crate::payment::PaymentMethod;
use bodega_cart::{CartLine, Money};
use serde::{Deserialize, Serialize};

/// Order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Create an order ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random order ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("ord_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a completed demo checkout.
///
/// The lines are copied out of the cart at completion time, so clearing
/// the store afterwards does not touch the confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order identifier.
    pub order_id: OrderId,
    /// Email recorded by the demo login.
    pub email: String,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// The purchased lines, in display order.
    pub lines: Vec<CartLine>,
    /// Order total at completion.
    pub total: Money,
    /// Unix timestamp of completion.
    pub confirmed_at: i64,
}

impl OrderConfirmation {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ord_"));
        // Base64 of 18 bytes is 24 chars, plus the prefix.
        assert_eq!(id.as_str().len(), 28);
    }

    #[test]
    fn test_order_id_uniqueness() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }
}
