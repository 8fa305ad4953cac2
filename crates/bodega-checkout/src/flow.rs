//! Checkout flow state machine.

use crate::error::CheckoutError;
use crate::order::{OrderConfirmation, OrderId};
use crate::payment::PaymentMethod;
use crate::shopper::Shopper;
use bodega_cart::Cart;
use serde::{Deserialize, Serialize};

/// Steps in the demo checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    Cart,
    /// Demo login.
    Login,
    /// Payment method selection.
    Payment,
    /// Checkout complete.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Login => "login",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Login => "Login",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Login => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Complete => 4,
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Completed steps.
    pub completed_steps: Vec<CheckoutStep>,
    /// Who is checking out.
    pub shopper: Shopper,
    /// Selected payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl CheckoutFlow {
    /// Start a checkout for the given cart.
    ///
    /// An empty cart is rejected with a user-facing message and no flow is
    /// created.
    pub fn begin(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let now = current_timestamp();
        Ok(Self {
            step: CheckoutStep::Cart,
            completed_steps: Vec::new(),
            shopper: Shopper::Anonymous,
            payment_method: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if the flow can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Cart => true,
            CheckoutStep::Login => true,
            CheckoutStep::Payment => self.shopper.is_known(),
            CheckoutStep::Complete => self.shopper.is_known() && self.payment_method.is_some(),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let next = match self.step {
            CheckoutStep::Cart => CheckoutStep::Login,
            CheckoutStep::Login => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Complete,
            CheckoutStep::Complete => {
                return Err(CheckoutError::InvalidTransition {
                    from: "complete".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(CheckoutError::Incomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;
        self.updated_at = current_timestamp();

        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let prev = match self.step {
            CheckoutStep::Cart => {
                return Err(CheckoutError::InvalidTransition {
                    from: "cart".to_string(),
                    to: "none".to_string(),
                })
            }
            CheckoutStep::Login => CheckoutStep::Cart,
            CheckoutStep::Payment => CheckoutStep::Login,
            CheckoutStep::Complete => CheckoutStep::Payment,
        };

        self.step = prev;
        self.updated_at = current_timestamp();

        Ok(prev)
    }

    /// What is missing to advance to a step.
    fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            CheckoutStep::Payment => {
                if !self.shopper.is_known() {
                    missing.push("login");
                }
            }
            CheckoutStep::Complete => {
                if !self.shopper.is_known() {
                    missing.push("login");
                }
                if self.payment_method.is_none() {
                    missing.push("payment method");
                }
            }
            _ => {}
        }
        missing
    }

    /// Demo login: both fields must be non-blank after trimming. Only the
    /// email is kept.
    pub fn login(
        &mut self,
        email: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> Result<(), CheckoutError> {
        let email = email.as_ref().trim();
        let password = password.as_ref().trim();
        if email.is_empty() || password.is_empty() {
            return Err(CheckoutError::MissingCredentials);
        }
        self.shopper = Shopper::known(email);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Record the selected payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
        self.updated_at = current_timestamp();
    }

    /// Complete the checkout from the payment step.
    ///
    /// Re-checks the cart (it may have been emptied by another view while
    /// the flow was open) and returns the confirmation snapshot. The caller
    /// clears the store afterwards.
    pub fn complete(&mut self, cart: &Cart) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: "complete".to_string(),
            });
        }
        let email = self
            .shopper
            .email()
            .ok_or_else(|| CheckoutError::Incomplete("login".to_string()))?
            .to_string();
        let payment_method = self
            .payment_method
            .ok_or_else(|| CheckoutError::Incomplete("payment method".to_string()))?;

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = CheckoutStep::Complete;
        self.updated_at = current_timestamp();

        Ok(OrderConfirmation {
            order_id: OrderId::generate(),
            email,
            payment_method,
            lines: cart.lines().to_vec(),
            total: cart.total_price(),
            confirmed_at: self.updated_at,
        })
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodega_cart::{Currency, Money};

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::new();
        cart.add("Mug", Money::new(2500, Currency::PEN), None, 2)
            .unwrap();
        cart
    }

    #[test]
    fn test_begin_rejects_empty_cart() {
        assert_eq!(
            CheckoutFlow::begin(&Cart::new()).unwrap_err(),
            CheckoutError::EmptyCart
        );
    }

    #[test]
    fn test_begin_starts_at_cart_step() {
        let flow = CheckoutFlow::begin(&cart_with_one_line()).unwrap();
        assert_eq!(flow.step, CheckoutStep::Cart);
        assert!(flow.completed_steps.is_empty());
        assert!(!flow.is_complete());
    }

    #[test]
    fn test_advance_requires_login_before_payment() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();

        flow.advance().unwrap();
        assert_eq!(flow.step, CheckoutStep::Login);

        // Payment is gated on the demo login.
        assert_eq!(
            flow.advance().unwrap_err(),
            CheckoutError::Incomplete("login".to_string())
        );

        flow.login("ana@example.com", "secret").unwrap();
        assert_eq!(flow.advance().unwrap(), CheckoutStep::Payment);
    }

    #[test]
    fn test_login_rejects_blank_fields() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();

        assert_eq!(
            flow.login("", "secret").unwrap_err(),
            CheckoutError::MissingCredentials
        );
        assert_eq!(
            flow.login("ana@example.com", "   ").unwrap_err(),
            CheckoutError::MissingCredentials
        );
        assert!(!flow.shopper.is_known());
    }

    #[test]
    fn test_full_flow_produces_confirmation() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();

        flow.advance().unwrap();
        flow.login("ana@example.com", "secret").unwrap();
        flow.advance().unwrap();
        flow.select_payment(PaymentMethod::Wallet);

        let confirmation = flow.complete(&cart).unwrap();
        assert!(flow.is_complete());
        assert_eq!(confirmation.email, "ana@example.com");
        assert_eq!(confirmation.payment_method, PaymentMethod::Wallet);
        assert_eq!(confirmation.total, cart.total_price());
        assert_eq!(confirmation.item_count(), 2);
        assert_eq!(confirmation.lines.len(), 1);
    }

    #[test]
    fn test_complete_requires_payment_step() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();

        let err = flow.complete(&cart).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidTransition { .. }));
    }

    #[test]
    fn test_complete_rechecks_cart() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();
        flow.advance().unwrap();
        flow.login("ana@example.com", "secret").unwrap();
        flow.advance().unwrap();
        flow.select_payment(PaymentMethod::Card);

        // Another view emptied the cart while the flow was open.
        assert_eq!(
            flow.complete(&Cart::new()).unwrap_err(),
            CheckoutError::EmptyCart
        );
        assert!(!flow.is_complete());
    }

    #[test]
    fn test_go_back() {
        let cart = cart_with_one_line();
        let mut flow = CheckoutFlow::begin(&cart).unwrap();
        flow.advance().unwrap();

        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Cart);
        assert!(flow.go_back().is_err());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckoutStep::Cart.number(), 1);
        assert_eq!(CheckoutStep::Complete.number(), 4);
        assert_eq!(CheckoutStep::Payment.as_str(), "payment");
        assert_eq!(CheckoutStep::Login.display_name(), "Login");
    }
}
