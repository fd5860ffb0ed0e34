//! Domain model: products, carts and order payloads
pub mod aggregates;
pub mod events;
pub mod value_objects;

pub use aggregates::{Cart, CartLine, OrderLine, OrderNotification, Product, ShippingDetails};
pub use events::CartEvent;
pub use value_objects::{Money, MoneyError, ProductId};
