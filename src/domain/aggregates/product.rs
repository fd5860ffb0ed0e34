//! Product Aggregate

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Money, ProductId};

/// A catalog entry. Read-only to the catalog, cart and checkout; only a
/// repository creates or replaces products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    category: Option<String>,
    price: Money,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Self { id: ProductId::new(id), name: name.into(), description: String::new(), category: None, price }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = description.into(); self }
    pub fn with_category(mut self, category: impl Into<String>) -> Self { self.category = Some(category.into()); self }
    pub fn with_id(mut self, id: ProductId) -> Self { self.id = id; self }

    pub fn id(&self) -> ProductId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }
    pub fn price(&self) -> Money { self.price }

    /// Exact, case-sensitive category match.
    pub fn in_category(&self, category: &str) -> bool { self.category.as_deref() == Some(category) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    #[test]
    fn test_product_create() {
        let p = Product::new(1, "Kayak", Money::new(Decimal::new(275, 0)).unwrap())
            .with_description("A boat for one person")
            .with_category("Watersports");
        assert_eq!(p.name(), "Kayak");
        assert_eq!(p.description(), "A boat for one person");
        assert_eq!(p.category(), Some("Watersports"));
        assert!(p.in_category("Watersports"));
        assert!(!p.in_category("watersports"));
    }
    #[test]
    fn test_uncategorized_product_matches_nothing() {
        let p = Product::new(2, "Gift card", Money::zero());
        assert_eq!(p.category(), None);
        assert_eq!(p.description(), "");
        assert!(!p.in_category(""));
    }
}
