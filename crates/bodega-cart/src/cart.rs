//! The cart: an ordered sequence of line items.

use crate::error::CartError;
use crate::line::CartLine;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines keep their insertion order, which is also the display order.
/// There is at most one line per product name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Build a cart from already-validated lines.
    ///
    /// Lines whose currency differs from `currency` are rejected.
    pub fn from_lines(lines: Vec<CartLine>, currency: Currency) -> Result<Self, CartError> {
        for line in &lines {
            if line.unit_price.currency != currency {
                return Err(CartError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.unit_price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { lines, currency })
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same name exists, its quantity is incremented by
    /// `quantity`; otherwise a new line is appended.
    ///
    /// Returns an error if:
    /// - `quantity` is below 1
    /// - `unit_price` is negative or in the wrong currency
    /// - the merged quantity or subtotal would overflow
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        image: Option<String>,
        quantity: i64,
    ) -> Result<(), CartError> {
        let name = name.into();
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if unit_price.currency != self.currency {
            return Err(CartError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.name == name) {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::Overflow)?;
            if existing.unit_price.try_multiply(merged).is_none() {
                return Err(CartError::Overflow);
            }
            existing.quantity = merged;
            return Ok(());
        }

        let line = CartLine::new(name, unit_price, image, quantity)?;
        self.lines.push(line);
        Ok(())
    }

    /// Remove the line at `index` (0-based, display order).
    ///
    /// Out-of-bounds indexes are a safe no-op; the removed line is returned
    /// when one existed.
    pub fn remove_at(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Set the quantity of the line at `index`.
    ///
    /// Quantities below 1 are rejected and the stored value is retained, as
    /// is an unknown index or an overflowing subtotal. Nothing is mutated on
    /// rejection.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::IndexOutOfBounds(index))?;
        if line.unit_price.try_multiply(quantity).is_none() {
            return Err(CartError::Overflow);
        }
        line.quantity = quantity;
        Ok(())
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total price: sum of `unit_price * quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.subtotal())
            })
    }

    /// Total quantity: sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product name.
    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(cents: i64) -> Money {
        Money::new(cents, Currency::PEN)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price().display_amount(), "0.00");
    }

    #[test]
    fn test_add_appends_line() {
        let mut cart = Cart::new();
        cart.add("Mug", pen(2500), None, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_same_name_merges() {
        let mut cart = Cart::new();
        cart.add("Widget", pen(1000), Some("widget.png".into()), 2)
            .unwrap();
        cart.add("Widget", pen(1000), Some("widget.png".into()), 3)
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("Widget").unwrap().quantity, 5);
        assert_eq!(cart.total_price().display_amount(), "50.00");
    }

    #[test]
    fn test_add_quantity_is_sum_of_adds() {
        let mut cart = Cart::new();
        for qty in [1, 4, 2, 3] {
            cart.add("Widget", pen(1000), None, qty).unwrap();
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add("Mug", pen(2500), None, 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add("Mug", pen(2500), None, -3),
            Err(CartError::InvalidQuantity(-3))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::with_currency(Currency::PEN);
        let result = cart.add("Mug", Money::new(2500, Currency::USD), None, 1);
        assert!(matches!(result, Err(CartError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_add_merge_overflow_leaves_line_unchanged() {
        let mut cart = Cart::new();
        cart.add("Mug", pen(1), None, i64::MAX).unwrap();
        assert_eq!(cart.add("Mug", pen(1), None, 1), Err(CartError::Overflow));
        assert_eq!(cart.get("Mug").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut cart = Cart::new();
        cart.add("A", pen(100), None, 1).unwrap();
        cart.add("B", pen(200), None, 1).unwrap();
        cart.add("C", pen(300), None, 1).unwrap();

        let removed = cart.remove_at(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<_> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_remove_at_out_of_bounds_is_noop() {
        let mut cart = Cart::new();
        cart.add("A", pen(100), None, 1).unwrap();

        assert!(cart.remove_at(5).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_first_of_two_recomputes_total() {
        let mut cart = Cart::new();
        cart.add("A", pen(1000), None, 2).unwrap();
        cart.add("B", pen(500), None, 1).unwrap();

        cart.remove_at(0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].name, "B");
        assert_eq!(cart.total_price().display_amount(), "5.00");
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add("A", pen(1000), None, 1).unwrap();

        cart.set_quantity(0, 7).unwrap();
        assert_eq!(cart.total_quantity(), 7);
    }

    #[test]
    fn test_set_quantity_rejects_non_positive() {
        let mut cart = Cart::new();
        cart.add("A", pen(1000), None, 3).unwrap();
        let before = cart.clone();

        assert_eq!(cart.set_quantity(0, 0), Err(CartError::InvalidQuantity(0)));
        assert_eq!(
            cart.set_quantity(0, -2),
            Err(CartError::InvalidQuantity(-2))
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_unknown_index_is_rejected() {
        let mut cart = Cart::new();
        cart.add("A", pen(1000), None, 3).unwrap();

        assert_eq!(
            cart.set_quantity(9, 2),
            Err(CartError::IndexOutOfBounds(9))
        );
        assert_eq!(cart.get("A").unwrap().quantity, 3);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add("A", pen(1050), None, 2).unwrap();
        cart.add("B", pen(399), None, 3).unwrap();

        assert_eq!(cart.total_quantity(), 5);
        // 2 * 10.50 + 3 * 3.99 = 32.97
        assert_eq!(cart.total_price().display_amount(), "32.97");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("A", pen(100), None, 1).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price().display_amount(), "0.00");
    }

    #[test]
    fn test_from_lines_rejects_mixed_currency() {
        let lines = vec![
            CartLine::new("A", Money::new(100, Currency::PEN), None, 1).unwrap(),
            CartLine::new("B", Money::new(100, Currency::USD), None, 1).unwrap(),
        ];
        assert!(Cart::from_lines(lines, Currency::PEN).is_err());
    }
}
