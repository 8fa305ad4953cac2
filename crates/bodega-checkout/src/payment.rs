//! Payment method selection.
//!
//! Nothing is charged anywhere; the selected method is only recorded on
//! the order confirmation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available demo payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,
    /// Mobile wallet.
    Wallet,
    /// Pay the courier on delivery.
    CashOnDelivery,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Wallet,
        PaymentMethod::CashOnDelivery,
    ];

    /// Stable identifier (e.g., for flags and persisted records).
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::CashOnDelivery => "cash",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / debit card",
            PaymentMethod::Wallet => "Mobile wallet",
            PaymentMethod::CashOnDelivery => "Cash on delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            "cash" => Ok(PaymentMethod::CashOnDelivery),
            _ => Err(()),
        }
    }
}
