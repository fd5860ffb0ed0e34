//! Aggregates module
pub mod product;
pub mod order;
pub mod cart;

pub use product::Product;
pub use order::{OrderLine, OrderNotification, ShippingDetails};
pub use cart::{Cart, CartLine};
