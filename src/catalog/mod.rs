//! Product catalog queries
//!
//! Read-only views over a [`ProductRepository`]: the category index,
//! category filtering, and paged listings that filter before paginating so
//! paging totals describe the filtered set.

pub mod pagination;

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;
use crate::domain::Product;
use crate::repository::ProductRepository;
use crate::Result;

pub use pagination::{paginate, Page, PagingInfo, PaginationError};

pub const DEFAULT_PAGE_SIZE: usize = 4;

/// One page of a product listing together with the filter that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub paging_info: PagingInfo,
    pub current_category: Option<String>,
}

pub struct ProductCatalog<R> {
    repository: R,
    page_size: usize,
}

impl<R: ProductRepository> ProductCatalog<R> {
    pub fn new(repository: R) -> Self { Self { repository, page_size: DEFAULT_PAGE_SIZE } }
    pub fn with_page_size(mut self, page_size: usize) -> Self { self.page_size = page_size; self }

    /// Distinct, non-empty categories in ascending order.
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let categories: BTreeSet<String> = self.repository.products()?
            .iter()
            .filter_map(Product::category)
            .filter(|c| !c.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(categories.into_iter().collect())
    }

    /// All products when `category` is `None`, otherwise those whose category
    /// matches exactly. Repository order is preserved.
    pub fn query_products(&self, category: Option<&str>) -> Result<Vec<Product>> {
        let mut products = self.repository.products()?;
        if let Some(category) = category {
            products.retain(|p| p.in_category(category));
        }
        debug!(category = ?category, count = products.len(), "Queried products");
        Ok(products)
    }

    pub fn list_products(&self, category: Option<&str>, page: usize) -> Result<ProductsPage> {
        let Page { items, paging_info } = paginate(self.query_products(category)?, page, self.page_size)?;
        Ok(ProductsPage { products: items, paging_info, current_category: category.map(str::to_owned) })
    }
}
