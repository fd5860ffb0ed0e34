//! In-memory product store

use rust_decimal::Decimal;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use super::{ProductRepository, RepositoryError};
use crate::domain::{Money, Product, ProductId};

/// Products kept in insertion order behind a `RwLock`, so one instance can be
/// shared between readers and the admin surface.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self { products: RwLock::new(products.into_iter().collect()) }
    }

    /// The demo sporting-goods catalog.
    pub fn seeded() -> Self {
        let price = |cents: i64| Money::new(Decimal::new(cents, 2)).unwrap_or_default();
        Self::with_products([
            Product::new(1, "Kayak", price(27500)).with_description("A boat for one person").with_category("Watersports"),
            Product::new(2, "Lifejacket", price(4895)).with_description("Protective and fashionable").with_category("Watersports"),
            Product::new(3, "Soccer Ball", price(1950)).with_description("FIFA-approved size and weight").with_category("Soccer"),
            Product::new(4, "Corner Flags", price(3495)).with_description("Give your playing field a professional touch").with_category("Soccer"),
            Product::new(5, "Stadium", price(7950000)).with_description("Flat-packed 35,000-seat stadium").with_category("Soccer"),
            Product::new(6, "Thinking Cap", price(1600)).with_description("Improve your brain efficiency by 75%").with_category("Chess"),
            Product::new(7, "Unsteady Chair", price(2995)).with_description("Secretly give your opponent a disadvantage").with_category("Chess"),
            Product::new(8, "Human Chess Board", price(7500)).with_description("A fun game for the family").with_category("Chess"),
            Product::new(9, "Bling-Bling King", price(120000)).with_description("Gold-plated, diamond-studded King").with_category("Chess"),
        ])
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Product>>, RepositoryError> {
        self.products.read().map_err(|_| RepositoryError::Unavailable("product list lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Product>>, RepositoryError> {
        self.products.write().map_err(|_| RepositoryError::Unavailable("product list lock poisoned".into()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn products(&self) -> Result<Vec<Product>, RepositoryError> { Ok(self.read()?.clone()) }

    fn save_product(&self, product: Product) -> Result<ProductId, RepositoryError> {
        let mut products = self.write()?;
        if product.id().is_unassigned() {
            let next = products.iter().map(|p| p.id().value()).max().unwrap_or(0) + 1;
            let id = ProductId::new(next);
            products.push(product.with_id(id));
            debug!(product_id = %id, "Product added");
            return Ok(id);
        }
        let id = product.id();
        match products.iter_mut().find(|p| p.id() == id) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
        debug!(product_id = %id, "Product saved");
        Ok(id)
    }

    fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.write()?;
        let removed = products.iter().position(|p| p.id() == id).map(|pos| products.remove(pos));
        if removed.is_some() { debug!(product_id = %id, "Product deleted"); }
        Ok(removed)
    }

    fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read()?.iter().find(|p| p.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_new_product_assigns_id() {
        let repo = InMemoryProductRepository::seeded();
        let before = repo.products().unwrap().len();
        let id = repo.save_product(Product::new(0, "Test", Money::zero())).unwrap();
        assert_eq!(repo.products().unwrap().len(), before + 1);
        assert_eq!(id, ProductId::new(10));
        assert_eq!(repo.find_product(id).unwrap().unwrap().name(), "Test");
    }

    #[test]
    fn test_save_existing_product_replaces_it() {
        let repo = InMemoryProductRepository::seeded();
        let before = repo.products().unwrap().len();
        let football = Product::new(1, "Football", Money::new(Decimal::new(26, 0)).unwrap())
            .with_description("Some description")
            .with_category("Watersports");
        repo.save_product(football).unwrap();
        assert_eq!(repo.products().unwrap().len(), before);
        assert_eq!(repo.find_product(ProductId::new(1)).unwrap().unwrap().price().amount(), Decimal::new(26, 0));
        assert_eq!(repo.products().unwrap()[0].name(), "Football");
    }

    #[test]
    fn test_find_and_delete_missing_product() {
        let repo = InMemoryProductRepository::with_products([Product::new(1, "P1", Money::zero())]);
        assert!(repo.find_product(ProductId::new(4)).unwrap().is_none());
        assert!(repo.delete_product(ProductId::new(4)).unwrap().is_none());
        assert_eq!(repo.products().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_product() {
        let repo = InMemoryProductRepository::with_products([
            Product::new(1, "P1", Money::zero()),
            Product::new(2, "P2", Money::zero()),
            Product::new(3, "P3", Money::zero()),
        ]);
        let removed = repo.delete_product(ProductId::new(2)).unwrap().unwrap();
        assert_eq!(removed.name(), "P2");
        let names: Vec<_> = repo.products().unwrap().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["P1", "P3"]);
    }
}
