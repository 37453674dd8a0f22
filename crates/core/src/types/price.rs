//! Unit price represented with decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in the store's display currency.
///
/// Backed by [`Decimal`] so repeated cart arithmetic never accumulates
/// float drift. Serializes as a decimal string (`"12.50"`); blobs that
/// carry plain JSON numbers instead deserialize fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_string() {
        let price = Price::new(Decimal::new(1250, 2));
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"12.50\"");
    }

    #[test]
    fn test_deserializes_from_string() {
        let price: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(price, Price::new(Decimal::new(1250, 2)));
    }

    #[test]
    fn test_deserializes_from_number() {
        // Blobs written by older clients store the price as a JSON number.
        let price: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(price.as_decimal(), Decimal::new(125, 1));
    }

    #[test]
    fn test_display() {
        let price = Price::new(Decimal::new(999, 2));
        assert_eq!(format!("{price}"), "9.99");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::new(Decimal::new(100, 2)) < Price::new(Decimal::new(200, 2)));
    }
}
