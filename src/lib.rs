//! Storefront
//!
//! Catalog browsing, shopping cart and checkout for a small retail store.
//!
//! ## Features
//! - Product catalog with category index, filtering and pagination
//! - Session-owned shopping cart
//! - Order checkout with pluggable notification transport (file drop, NATS)

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod repository;

use thiserror::Error;

pub use catalog::{paginate, Page, PagingInfo, PaginationError, ProductCatalog, ProductsPage};
pub use checkout::{FileDropNotifier, NatsNotifier, Notifier, NotifyError, OrderProcessor, OrderReceipt, OrderRejection, RejectionReason};
pub use config::{ConfigError, NotifierKind, NotifierSettings, StoreConfig};
pub use domain::{Cart, CartEvent, CartLine, Money, MoneyError, OrderNotification, Product, ProductId, ShippingDetails};
pub use repository::{InMemoryProductRepository, ProductRepository, RepositoryError};

// =============================================================================
// Error Types
// =============================================================================

/// Failures of the catalog read paths.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
