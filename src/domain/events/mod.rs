//! Domain events
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    LineAdded { product_id: ProductId, quantity: u32 },
    QuantityIncreased { product_id: ProductId, by: u32, quantity: u32 },
    LineRemoved { product_id: ProductId, quantity: u32 },
    Cleared { lines: usize },
}
