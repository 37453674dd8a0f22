//! Cart line item records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// One product line in the cart, including its selected quantity.
///
/// This is the record persisted to device storage; the field names are
/// part of the stored blob format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog id of the product.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units in the cart. Lines stay in the cart at quantity 0
    /// until explicitly cleared.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.as_decimal() * Decimal::from(self.quantity)
    }
}

/// A product about to be placed in the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Catalog id of the product.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewCartItem {
    /// Convert into a cart line with an initial quantity of 1.
    #[must_use]
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

impl From<NewCartItem> for CartItem {
    fn from(new: NewCartItem) -> Self {
        new.into_item()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn beans() -> NewCartItem {
        NewCartItem {
            id: ProductId::new("sku-1"),
            title: "Espresso Beans".to_owned(),
            image_url: "https://img.example.com/beans.png".to_owned(),
            price: Price::new(Decimal::new(1250, 2)),
        }
    }

    #[test]
    fn test_into_item_starts_at_quantity_one() {
        let item = beans().into_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::new("sku-1"));
    }

    #[test]
    fn test_line_total() {
        let mut item = beans().into_item();
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::new(3750, 2));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let mut item = beans().into_item();
        item.quantity = 0;
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_field_names() {
        let item = beans().into_item();
        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();

        // The stored blob format names these fields exactly.
        for field in ["id", "title", "image_url", "price", "quantity"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut item = beans().into_item();
        item.quantity = 7;

        let json = serde_json::to_string(&item).unwrap();
        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
