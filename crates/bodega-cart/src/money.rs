//! Money type for representing monetary values.
//!
//! Uses a minor-unit integer representation (cents, céntimos) to avoid
//! floating-point precision issues in totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Peruvian sol.
    #[default]
    PEN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "PEN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PEN => "PEN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "S/").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PEN => "S/ ",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Number of minor-unit digits. All supported currencies use two.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PEN" => Some(Currency::PEN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., céntimos
/// for PEN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use bodega_cart::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::PEN);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string with symbol (e.g., "S/ 49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Try to add another Money value. Returns `None` on currency mismatch
    /// or arithmetic overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to multiply by a scalar. Returns `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Add another same-currency value, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::PEN);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::PEN);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::PEN);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(10.0, Currency::USD);
        assert_eq!(m.amount_cents, 1000);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::PEN);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::PEN);
        assert_eq!(m.display(), "S/ 49.99");
        assert_eq!(m.display_amount(), "49.99");
    }

    #[test]
    fn test_zero_displays_two_decimals() {
        assert_eq!(Money::zero(Currency::PEN).display_amount(), "0.00");
    }

    #[test]
    fn test_try_add() {
        let a = Money::new(1000, Currency::PEN);
        let b = Money::new(500, Currency::PEN);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1500);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let a = Money::new(1000, Currency::PEN);
        let b = Money::new(500, Currency::USD);
        assert!(a.try_add(&b).is_none());
    }

    #[test]
    fn test_try_multiply() {
        let m = Money::new(1000, Currency::PEN);
        assert_eq!(m.try_multiply(3).unwrap().amount_cents, 3000);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::PEN);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("PEN"), Some(Currency::PEN));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
