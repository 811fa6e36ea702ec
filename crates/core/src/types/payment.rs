//! Payment and order status enums.

use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
///
/// Serialized names match the values written by the checkout form into the
/// document store (`"Card"`, `"Cash"`, `"PayPal"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentType {
    #[default]
    Card,
    Cash,
    PayPal,
}

impl PaymentType {
    /// Stable display/wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Cash => "Cash",
            Self::PayPal => "PayPal",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Card" => Ok(Self::Card),
            "Cash" => Ok(Self::Cash),
            "PayPal" => Ok(Self::PayPal),
            _ => Err(format!("invalid payment type: {s}")),
        }
    }
}

/// Order lifecycle status.
///
/// Checkout is a simulation, so the only status ever produced today is
/// `Complete`. The enum exists so order monitoring can filter on status when
/// more states appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Complete,
}

impl OrderStatus {
    /// Stable display/wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_type_wire_names() {
        let json = serde_json::to_string(&PaymentType::PayPal).unwrap();
        assert_eq!(json, "\"PayPal\"");

        let parsed: PaymentType = serde_json::from_str("\"Cash\"").unwrap();
        assert_eq!(parsed, PaymentType::Cash);
    }

    #[test]
    fn test_payment_type_from_str() {
        assert_eq!("Card".parse::<PaymentType>().unwrap(), PaymentType::Card);
        assert!("EFT".parse::<PaymentType>().is_err());
    }

    #[test]
    fn test_order_status_wire_name() {
        let json = serde_json::to_string(&OrderStatus::Complete).unwrap();
        assert_eq!(json, "\"Complete\"");
    }
}
