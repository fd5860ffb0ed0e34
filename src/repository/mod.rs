//! Product repository contract
//!
//! The catalog only reads through [`ProductRepository::products`]; the write
//! operations exist for the admin surface that maintains the product list.

mod memory;

use std::sync::Arc;
use thiserror::Error;
use crate::domain::{Product, ProductId};

pub use memory::InMemoryProductRepository;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Product store unavailable: {0}")]
    Unavailable(String),
}

pub trait ProductRepository: Send + Sync {
    /// Every product, in a stable store-defined order.
    fn products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Inserts a product whose id is unassigned, otherwise replaces the product
    /// with the same id. Returns the stored id.
    fn save_product(&self, product: Product) -> Result<ProductId, RepositoryError>;

    /// Removes and returns the product, or `None` when no such id exists.
    fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products()?.into_iter().find(|p| p.id() == id))
    }
}

impl<R: ProductRepository + ?Sized> ProductRepository for &R {
    fn products(&self) -> Result<Vec<Product>, RepositoryError> { (**self).products() }
    fn save_product(&self, product: Product) -> Result<ProductId, RepositoryError> { (**self).save_product(product) }
    fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> { (**self).delete_product(id) }
    fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> { (**self).find_product(id) }
}

impl<R: ProductRepository + ?Sized> ProductRepository for Arc<R> {
    fn products(&self) -> Result<Vec<Product>, RepositoryError> { (**self).products() }
    fn save_product(&self, product: Product) -> Result<ProductId, RepositoryError> { (**self).save_product(product) }
    fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> { (**self).delete_product(id) }
    fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> { (**self).find_product(id) }
}
