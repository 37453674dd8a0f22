//! Newtype ID for catalog products.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a product in the catalog.
///
/// Product ids are opaque strings minted by the catalog service. The cart
/// treats them as stable keys: equal ids refer to the same product across
/// sessions, and nothing here inspects their contents.
///
/// ## Examples
///
/// ```
/// use gomarket_core::ProductId;
///
/// let id = ProductId::new("sku-1029");
/// assert_eq!(id.as_str(), "sku-1029");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = ProductId::new("sku-42");
        assert_eq!(id.as_str(), "sku-42");
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("sku-42");
        assert_eq!(format!("{id}"), "sku-42");
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(ProductId::new("a"), ProductId::from("a"));
        assert_ne!(ProductId::new("a"), ProductId::new("b"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("sku-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sku-42\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_into_inner() {
        let id = ProductId::new("sku-42");
        assert_eq!(id.into_inner(), "sku-42");
    }
}
