//! Shopper identity for the demo checkout.
//!
//! There is no real authentication: a successful "login" only records the
//! email. Passwords are checked for presence and then discarded.

use serde::{Deserialize, Serialize};

/// Who is checking out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Shopper {
    /// Browsing without logging in.
    #[default]
    Anonymous,
    /// Went through the demo login.
    Known {
        /// Email address.
        email: String,
    },
}

impl Shopper {
    /// Create a known shopper.
    pub fn known(email: impl Into<String>) -> Self {
        Shopper::Known {
            email: email.into(),
        }
    }

    /// Check if the shopper went through the demo login.
    pub fn is_known(&self) -> bool {
        matches!(self, Shopper::Known { .. })
    }

    /// Email address, if known.
    pub fn email(&self) -> Option<&str> {
        match self {
            Shopper::Known { email } => Some(email),
            Shopper::Anonymous => None,
        }
    }

    /// Name to show in the UI.
    pub fn display_name(&self) -> &str {
        self.email().unwrap_or("guest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_shopper() {
        let shopper = Shopper::default();
        assert!(!shopper.is_known());
        assert_eq!(shopper.email(), None);
        assert_eq!(shopper.display_name(), "guest");
    }

    #[test]
    fn test_known_shopper() {
        let shopper = Shopper::known("ana@example.com");
        assert!(shopper.is_known());
        assert_eq!(shopper.email(), Some("ana@example.com"));
        assert_eq!(shopper.display_name(), "ana@example.com");
    }
}
